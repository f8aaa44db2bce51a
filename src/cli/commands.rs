use crate::cli::args::{Cli, CompletionsArgs, FlattenArgs, LoadArgs, LookupArgs};
use crate::config::Config;
use crate::loader::FsLoader;
use crate::logging;
use crate::map::SourceMapInput;
use crate::remap::{remap_chain, remap_decoded, RemapOptions};
use crate::source_map::OriginalPosition;
use crate::tree::build_source_map_tree;
use crate::ui::formatter::Formatter;
use crate::RemapError;
use clap::CommandFactory;
use miette::IntoDiagnostic;
use std::fs;
use std::io;
use std::path::Path;

fn print_success(message: impl AsRef<str>) {
    eprintln!("{}", Formatter::success(message));
}

fn print_warning(message: impl AsRef<str>) {
    eprintln!("{}", Formatter::warning(message));
}

/// Execute the flatten command
pub fn flatten(args: FlattenArgs, config: &Config) -> miette::Result<()> {
    let inputs = read_inputs(&args.load)?;
    let mut loader = fs_loader(&args.load, config);
    let mut options = remap_options(&args.load, config);
    options.exclude_content |= args.exclude_content;

    if args.decoded {
        let flattened = remap_decoded(inputs, &mut loader, &options)?;
        for (line, segments) in flattened.mappings.iter().enumerate() {
            if !segments.is_empty() {
                println!(
                    "{}",
                    Formatter::format_segments(line, segments, &flattened.sources)
                );
            }
        }
        return Ok(());
    }

    let map = remap_chain(inputs, &mut loader, &options)?;
    logging::log_summary(&Formatter::format_summary(&map));

    let json = if args.pretty || config.output.pretty.unwrap_or(false) {
        map.to_json_pretty()?
    } else {
        map.to_json()?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &json).map_err(|e| {
                RemapError::FileError(format!("Failed to write output {:?}: {}", path, e))
            })?;
            logging::log_map_written(&path.to_string_lossy(), json.len());
            print_success(format!(
                "Wrote {} ({})",
                path.display(),
                Formatter::format_summary(&map)
            ));
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Execute the lookup command
pub fn lookup(args: LookupArgs, config: &Config) -> miette::Result<()> {
    let inputs = read_inputs(&args.load)?;
    let mut loader = fs_loader(&args.load, config);
    let options = remap_options(&args.load, config);

    let tree = build_source_map_tree(inputs, &mut loader, options.max_depth)?;
    let position = tree
        .original_position_for(args.line, args.column)
        .map(|traced| OriginalPosition {
            source: traced.source.to_string(),
            line: traced.line,
            column: traced.column,
            name: traced.name.map(str::to_string),
        });

    if args.json {
        println!("{}", serde_json::to_string(&position).into_diagnostic()?);
        return Ok(());
    }

    match position {
        Some(position) => println!("{}", Formatter::format_position(&position)),
        None => print_warning(format!(
            "No original position for {}:{}",
            args.line, args.column
        )),
    }
    Ok(())
}

/// Execute the completions command
pub fn completions(args: CompletionsArgs) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(args.shell, &mut cmd, name, &mut io::stdout());
}

fn read_inputs(load: &LoadArgs) -> Result<Vec<SourceMapInput>, RemapError> {
    load.maps
        .iter()
        .map(|path| {
            logging::log_loading_map(&path.to_string_lossy());
            fs::read_to_string(path)
                .map(SourceMapInput::from)
                .map_err(|e| {
                    RemapError::FileError(format!("Failed to read source map {:?}: {}", path, e))
                })
        })
        .collect()
}

fn fs_loader(load: &LoadArgs, config: &Config) -> FsLoader {
    let base_dir = load
        .base_dir
        .clone()
        .or_else(|| config.loader.base_dir.clone())
        .unwrap_or_else(|| {
            load.maps
                .last()
                .and_then(|path| path.parent())
                .map(Path::to_path_buf)
                .unwrap_or_default()
        });

    FsLoader::new(base_dir)
        .read_content(load.read_content || config.loader.read_content.unwrap_or(false))
}

fn remap_options(load: &LoadArgs, config: &Config) -> RemapOptions {
    let mut options = config.remap.clone();
    if let Some(max_depth) = load.max_depth {
        options.max_depth = max_depth;
    }
    options
}
