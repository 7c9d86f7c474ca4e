//! Schema command - prints the built-in tuning schema.

use std::process::ExitCode;

use cputune_schema::{BUILTIN_SCHEMA, Schema, SchemaNode, SchemaObject};

#[derive(clap::Args)]
pub struct Args {
    /// Print one `dotted.key: type` line per field instead of the JSON document
    #[arg(long)]
    pub keys: bool,
}

pub fn run(args: Args) -> anyhow::Result<ExitCode> {
    if !args.keys {
        print!("{BUILTIN_SCHEMA}");
        return Ok(ExitCode::SUCCESS);
    }
    let mut lines = Vec::new();
    collect_keys(Schema::builtin().root(), "", &mut lines);
    for line in lines {
        println!("{line}");
    }
    Ok(ExitCode::SUCCESS)
}

fn collect_keys(object: &SchemaObject, prefix: &str, out: &mut Vec<String>) {
    for (key, node) in object.iter() {
        let full_key = if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}.{key}")
        };
        match node {
            SchemaNode::Object(inner) => collect_keys(inner, &full_key, out),
            SchemaNode::Array(Some(element)) => match element.as_object() {
                Some(inner) => collect_keys(inner, &format!("{full_key}[]"), out),
                None => out.push(format!("{full_key}: array")),
            },
            SchemaNode::Array(None) => out.push(format!("{full_key}: array")),
            SchemaNode::Leaf(tag) => out.push(format!("{full_key}: {tag}")),
            SchemaNode::Unsupported(tag) => out.push(format!("{full_key}: {tag} (unsupported)")),
            SchemaNode::Malformed => out.push(format!("{full_key}: (malformed)")),
        }
    }
}
