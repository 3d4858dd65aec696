macro_rules! template_enum {
	(
		$($variant:ident: $filename:expr),*,
	) => {
		#[allow(dead_code, non_camel_case_types)]
		enum Template {
			$($variant),*
		}

		impl Template {
			fn as_array() -> Vec<(&'static str, &'static str)> {
				vec![
					$((stringify!($variant), include_str!(concat!("templates/", $filename, ".tera")))),*
				]
			}

			fn name(&self) -> &'static str {
				match self {
					$(Template::$variant => stringify!($variant)),*
				}
			}
		}
	};
}

mod commands {
	pub mod embed;
	pub mod strip_transforms;
	pub mod transform;
}
mod directives;
mod embedder;
mod errors;
mod scene;
mod settings;
mod string_literal;

pub use errors::{Error, Result};
use log::error;
use std::error::Error as StdError;
use std::path::PathBuf;
use std::process;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
enum Command {
	/// Embeds shader sources into C++ headers (default).
	Embed,
	/// Removes node transforms from a glTF scene.
	StripTransforms {
		#[structopt(default_value = "Dragon - Copy/scene.gltf")]
		scene_file: PathBuf,
	},
	/// Prints each line of a shader as a string literal.
	Transform { source_file: PathBuf },
}

impl Default for Command {
	fn default() -> Self {
		Command::Embed
	}
}

#[derive(Debug, StructOpt)]
#[structopt(about)]
struct Args {
	#[structopt(subcommand)]
	command: Option<Command>,

	#[structopt(short, long, default_value = ".")]
	project_directory: PathBuf,
}

fn run(args: &Args, command: &Command) -> Result<()> {
	match command {
		Command::Embed => commands::embed::execute(&commands::embed::Options {
			project_directory: &args.project_directory,
		}),

		Command::StripTransforms { scene_file } => {
			commands::strip_transforms::execute(&commands::strip_transforms::Options {
				project_directory: &args.project_directory,
				scene_file,
			})
		}

		Command::Transform { source_file } => {
			commands::transform::execute(&commands::transform::Options {
				project_directory: &args.project_directory,
				source_file,
			})
		}
	}
}

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let args = Args::from_args();
	let default_command = Command::default();
	let command = args.command.as_ref().unwrap_or(&default_command);

	if let Err(err) = run(&args, command) {
		error!("{}", err);
		let mut source = err.source();
		while let Some(cause) = source {
			error!("  Caused by: {}", cause);
			source = cause.source();
		}
		process::exit(1);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_command() {
		let args = Args::from_iter(&["forge-tools"]);

		assert!(args.command.is_none());
		assert!(matches!(Command::default(), Command::Embed));
		assert_eq!(args.project_directory, PathBuf::from("."));
	}

	#[test]
	fn test_strip_transforms_default_scene_file() {
		let args = Args::from_iter(&["forge-tools", "-p", "Sandbox/res", "strip-transforms"]);

		assert_eq!(args.project_directory, PathBuf::from("Sandbox/res"));
		match args.command {
			Some(Command::StripTransforms { scene_file }) => {
				assert_eq!(scene_file, PathBuf::from("Dragon - Copy/scene.gltf"))
			}
			_ => panic!("Expected the strip-transforms command."),
		}
	}

	#[test]
	fn test_transform_source_file() {
		let args = Args::from_iter(&["forge-tools", "transform", "Lighting.shader"]);

		match args.command {
			Some(Command::Transform { source_file }) => {
				assert_eq!(source_file, PathBuf::from("Lighting.shader"))
			}
			_ => panic!("Expected the transform command."),
		}
	}
}
