// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! `ansor` - search Google Custom Search from the terminal.

use std::io::{self, BufRead, Write};

use ansor_common_config::{SearchConfigLayer, SecretString};
use ansor_search::{CseClient, QueryEscaping, SearchResponse};
use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "What would you like to search?";

/// Search Google Custom Search and print `title :  link` per result.
#[derive(Parser, Debug)]
#[command(name = "ansor", version)]
struct Args {
	/// Query words. When omitted, the query is read from stdin.
	query: Vec<String>,

	/// API key; overrides GSE_KEY / GSE_KEY_FILE.
	#[arg(long)]
	api_key: Option<String>,

	/// Search engine id (cx); overrides GSE_ENG.
	#[arg(long)]
	engine_id: Option<String>,

	/// Percent-encode the query instead of only replacing spaces.
	#[arg(long)]
	percent_encode: bool,

	/// Print the full response as JSON.
	#[arg(long)]
	json: bool,
}

impl Args {
	fn config_layer(&self) -> SearchConfigLayer {
		SearchConfigLayer {
			api_key: self.api_key.clone().map(SecretString::new),
			engine_id: self.engine_id.clone(),
		}
	}

	fn escaping(&self) -> QueryEscaping {
		if self.percent_encode {
			QueryEscaping::PercentEncode
		} else {
			QueryEscaping::Legacy
		}
	}
}

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();

	let dotenv = dotenvy::dotenv();

	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(io::stderr)
		.init();

	if let Err(e) = dotenv {
		tracing::debug!(error = %e, "no .env file loaded");
	}

	let mut layer = SearchConfigLayer::from_env().context("failed to load search credentials")?;
	layer.merge(args.config_layer());
	let config = layer.finalize()?;

	let client = CseClient::try_new(config.api_key.expose().as_str(), config.engine_id)?
		.with_query_escaping(args.escaping());

	let query = if args.query.is_empty() {
		let stdin = io::stdin();
		read_query(&mut stdin.lock(), &mut io::stdout())?
	} else {
		args.query.join(" ")
	};

	tracing::info!(query = %query, "searching");
	let response = client.search(&query).await?;

	let mut stdout = io::stdout().lock();
	if args.json {
		serde_json::to_writer_pretty(&mut stdout, &response)?;
		writeln!(stdout)?;
	} else {
		render_links(&response, &mut stdout)?;
	}

	Ok(())
}

/// Prompts on `output` and reads a single line from `input`.
fn read_query(input: &mut impl BufRead, output: &mut impl Write) -> Result<String> {
	writeln!(output, "{PROMPT}")?;
	output.flush()?;

	let mut line = String::new();
	if input.read_line(&mut line)? == 0 {
		bail!("no query given on stdin");
	}
	Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn render_links(response: &SearchResponse, output: &mut impl Write) -> io::Result<()> {
	for (title, link) in response.links() {
		writeln!(output, "{title} :  {link}")?;
	}
	Ok(())
}
