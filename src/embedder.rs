use crate::directives::{self, DirectiveMap};
use crate::settings::{EmbedMode, Settings, ShaderFile};
use crate::string_literal::{self, DECLARATION_JOINER, LIBRARY_JOINER};
use crate::{Error, Result};
use encoding::{DecoderTrap, EncodingRef};
use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};

template_enum! {
	Declarations: "declarations",
}

#[derive(Serialize)]
struct Declaration<'a> {
	name: &'a str,
	literal: String,
}

#[derive(Serialize)]
struct DeclarationsContext<'a> {
	declaration_type: &'a str,
	declarations: &'a [Declaration<'a>],
}

pub struct Embedder {
	declaration_type: String,
	directives: DirectiveMap,
	encoding: EncodingRef,
	tera: Tera,
}

impl Embedder {
	pub fn new(settings: &Settings) -> Result<Self> {
		let encoding = settings.source_encoding()?;

		let mut tera = Tera::default();

		tera.add_raw_templates(Template::as_array())
			.map_err(|err| Error::failed_to_render_template(Template::Declarations.name(), err))?;

		if let Some(template) = &settings.declaration_template {
			tera.add_raw_template(Template::Declarations.name(), template)
				.map_err(|err| {
					Error::failed_to_render_template(Template::Declarations.name(), err)
				})?;
		}

		Ok(Embedder {
			declaration_type: settings.declaration_type.clone(),
			directives: settings.directive_map()?,
			encoding,
			tera,
		})
	}

	/// Renders one declaration per section.
	pub fn render_sectioned(&self, lines: &[&str]) -> Result<String> {
		let sections = directives::split(lines, &self.directives);

		let declarations = sections
			.iter()
			.map(|section| {
				debug!("Section {}: {} lines.", section.key, section.lines.len());

				let literal = string_literal::render_lines(&section.lines, DECLARATION_JOINER);
				let literal = literal
					.strip_suffix(DECLARATION_JOINER)
					.unwrap_or(&literal)
					.to_string();

				Declaration {
					name: section.key,
					literal,
				}
			})
			.collect::<Vec<Declaration>>();

		let context = DeclarationsContext {
			declaration_type: &self.declaration_type,
			declarations: &declarations,
		};

		self.render_template(Template::Declarations, &context)
	}

	/// Renders all lines as one bare literal.
	pub fn render_single_literal(&self, lines: &[&str]) -> String {
		let literal = string_literal::render_lines(lines, LIBRARY_JOINER);
		literal
			.strip_prefix(LIBRARY_JOINER)
			.unwrap_or(&literal)
			.to_string()
	}

	fn render_template(&self, template: Template, context: &impl Serialize) -> Result<String> {
		let context = Context::from_serialize(context)
			.map_err(|err| Error::failed_to_render_template(template.name(), err))?;
		self.tera
			.render(template.name(), &context)
			.map_err(|err| Error::failed_to_render_template(template.name(), err))
	}

	/// Generates the output file of a shader, overwriting it.
	pub fn embed(&self, project_directory: &Path, shader: &ShaderFile) -> Result<PathBuf> {
		let source_path = project_directory.join(&shader.source);
		let output_path = project_directory.join(&shader.output);

		let contents = read_source(&source_path, self.encoding)?;
		let lines = string_literal::split_lines(&contents);

		let generated = match shader.mode {
			EmbedMode::Sectioned => self.render_sectioned(&lines)?,
			EmbedMode::SingleLiteral => self.render_single_literal(&lines),
		};

		fs::write(&output_path, generated)
			.map_err(|err| Error::failed_to_write(&output_path, err))?;

		info!(
			"Generated '{}' from '{}'.",
			output_path.to_string_lossy(),
			source_path.to_string_lossy()
		);
		Ok(output_path)
	}
}

/// Reads a shader source, decoding it with `encoding`.
pub fn read_source(path: &Path, encoding: EncodingRef) -> Result<String> {
	let contents = fs::read(path).map_err(|err| Error::failed_to_read(path, err))?;
	encoding
		.decode(&contents, DecoderTrap::Strict)
		.map_err(|err| Error::failed_to_decode(path, encoding.name(), err.into_owned()))
}
