//! CLI tool for flowgrid - computes grid layouts from JSON scenes
//!
//! Usage:
//!   flowgrid_cli <scene.json>              # Output JSON to stdout
//!   flowgrid_cli <scene.json> -o out.json  # Output JSON to file
//!
//! A scene describes the viewport, the layout configuration, and the grid
//! content; the output is the computed content size plus every attribute
//! record.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use flowgrid::{
    GridContent, LayoutAttributes, LayoutConfig, Size, UniformGridLayout, Viewport,
};

/// CLI input: viewport, configuration, and content in one document
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Scene {
    container: Size,
    #[serde(default)]
    scroll_y: f32,
    #[serde(default)]
    config: LayoutConfig,
    content: GridContent,
}

/// CLI output: everything a host would consume from one layout pass
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LayoutDump {
    content_size: Size,
    attributes: Vec<LayoutAttributes>,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: flowgrid_cli <scene.json> [-o output.json]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = if args.len() > 3 && args[2] == "-o" {
        Some(&args[3])
    } else {
        None
    };

    // Read input file
    let text = match fs::read_to_string(input_path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    // Parse the scene
    let scene: Scene = match serde_json::from_str(&text) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error parsing scene: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = scene.content.validate() {
        eprintln!("Error validating scene: {}", e);
        std::process::exit(1);
    }

    // Compute the layout
    let layout = UniformGridLayout::with_config(scene.config);
    let mut viewport = Viewport::with_size(scene.container.width, scene.container.height);
    let content_size = layout.content_size(&scene.content, &viewport);
    viewport.set_scroll(scene.scroll_y, content_size.height);

    let dump = LayoutDump {
        content_size,
        attributes: layout.layout_attributes(&scene.content, &viewport),
    };

    // Serialize to JSON
    let json = match serde_json::to_string_pretty(&dump) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
