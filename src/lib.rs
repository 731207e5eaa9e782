// Copyright 2025 the GeoCreator Authors
// SPDX-License-Identifier: Apache-2.0

//! GeoCreator: an interactive editor core for polygons, rectangles and
//! circles, with JSON documents and PNG export

use anyhow::{Context, Result, bail};
use std::path::PathBuf;

pub mod data;
pub mod editing;
pub mod model;
pub mod render;
pub mod settings;
pub mod theme;
pub mod tools;

use data::AppState;

/// Entry point for the GeoCreator command line renderer
pub fn run() -> Result<()> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("geocreator=info")),
        )
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let mut state = AppState::new();
    state.open(args.document.clone());
    if let Some(error) = state.error_message.take() {
        bail!(error);
    }

    state.session.set_canvas_size(kurbo::Size::new(
        f64::from(args.width),
        f64::from(args.height),
    ));
    render::export_png(&state.session, args.width, args.height, &args.output)
        .with_context(|| format!("rendering {}", args.document.display()))?;
    Ok(())
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq)]
struct Args {
    document: PathBuf,
    output: PathBuf,
    width: u32,
    height: u32,
}

const USAGE: &str = "Usage: geocreator <document.json> <output.png> [WIDTHxHEIGHT]";

/// Handle command-line arguments: a document, an output image and an
/// optional canvas size
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let (Some(document), Some(output)) = (args.next(), args.next()) else {
        bail!(USAGE);
    };

    let (width, height) = match args.next() {
        Some(size) => parse_size(&size).with_context(|| format!("invalid canvas size {size:?}"))?,
        None => (
            settings::export::DEFAULT_WIDTH,
            settings::export::DEFAULT_HEIGHT,
        ),
    };
    if args.next().is_some() {
        bail!(USAGE);
    }

    Ok(Args {
        document: PathBuf::from(document),
        output: PathBuf::from(output),
        width,
        height,
    })
}

fn parse_size(size: &str) -> Result<(u32, u32)> {
    let Some((width, height)) = size.split_once(['x', 'X']) else {
        bail!("expected WIDTHxHEIGHT");
    };
    let width = width.trim().parse().context("width is not a number")?;
    let height = height.trim().parse().context("height is not a number")?;
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn size_defaults_when_omitted() {
        let parsed = args(&["in.json", "out.png"]).unwrap();
        assert_eq!(parsed.document, PathBuf::from("in.json"));
        assert_eq!(parsed.output, PathBuf::from("out.png"));
        assert_eq!(
            (parsed.width, parsed.height),
            (settings::export::DEFAULT_WIDTH, settings::export::DEFAULT_HEIGHT)
        );
    }

    #[test]
    fn explicit_size_is_parsed() {
        let parsed = args(&["in.json", "out.png", "1024x768"]).unwrap();
        assert_eq!((parsed.width, parsed.height), (1024, 768));
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(args(&["in.json"]).is_err());
        assert!(args(&["in.json", "out.png", "wide"]).is_err());
        assert!(args(&["in.json", "out.png", "10x"]).is_err());
        assert!(args(&["in.json", "out.png", "10x10", "extra"]).is_err());
    }
}
