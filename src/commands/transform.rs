use crate::embedder;
use crate::settings::Settings;
use crate::string_literal;
use crate::Result;
use encoding::EncodingRef;
use std::path::Path;

pub struct Options<'a> {
	pub project_directory: &'a Path,
	pub source_file: &'a Path,
}

/// Renders each line of a shader as its own literal.
pub fn preview(source_file: &Path, encoding: EncodingRef) -> Result<Vec<String>> {
	let contents = embedder::read_source(source_file, encoding)?;
	Ok(string_literal::split_lines(&contents)
		.into_iter()
		.map(string_literal::wrap_line)
		.collect())
}

pub fn execute(options: &Options) -> Result<()> {
	let settings = Settings::load(options.project_directory)?;

	for line in preview(options.source_file, settings.source_encoding()?)? {
		println!("{}", line);
	}

	Ok(())
}
