use crate::directives::DirectiveMap;
use crate::{Error, Result};
use encoding::label::encoding_from_whatwg_label;
use encoding::EncodingRef;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILENAME: &str = "forge-tools.yml";

const SHADER_DIRECTORY: &str = "../Forge/src/Assets/Shaders";
const SHADER_LIBRARY_DIRECTORY: &str = "../Forge/src/Renderer/Shaders";

const SHADERS: &[&str] = &[
	"LitColor",
	"LitTexture",
	"DefaultColorAnimated",
	"LitTextureAnimated",
	"DefaultShadow",
	"DefaultPointShadow",
	"DefaultPick",
	"PBRColor",
	"PBRTexture",
	"PostProcessing/Bloom",
	"PostProcessing/BloomCombine",
	"PostProcessing/Blur",
	"PostProcessing/HDR",
	"PostProcessing/Dither",
];

const SHADER_LIBRARIES: &[&str] = &[
	"LightingUtils",
	"Lighting",
	"Shadows",
	"Clipping",
	"PBRUtils",
	"PBR",
	"Constants",
];

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum EmbedMode {
	/// One declaration per `#shader` section.
	Sectioned,
	/// The whole file as a bare literal.
	SingleLiteral,
}

impl Default for EmbedMode {
	fn default() -> Self {
		EmbedMode::Sectioned
	}
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ShaderFile {
	pub source: PathBuf,
	pub output: PathBuf,
	#[serde(default)]
	pub mode: EmbedMode,
}

impl ShaderFile {
	fn in_directory(directory: &str, name: &str, mode: EmbedMode) -> Self {
		let directory = Path::new(directory);
		ShaderFile {
			source: directory.join(format!("{}.shader", name)),
			output: directory.join(format!("{}.h", name)),
			mode,
		}
	}
}

fn default_declaration_type() -> String {
	"std::string".to_string()
}

fn default_directives() -> BTreeMap<String, String> {
	vec![
		("vertex", "vertexShaderSource"),
		("geometry", "geometryShaderSource"),
		("fragment", "fragmentShaderSource"),
	]
	.into_iter()
	.map(|(keyword, identifier)| (keyword.to_string(), identifier.to_string()))
	.collect()
}

fn default_encoding() -> String {
	"utf-8".to_string()
}

fn default_shaders() -> Vec<ShaderFile> {
	let shaders = SHADERS
		.iter()
		.map(|name| ShaderFile::in_directory(SHADER_DIRECTORY, name, EmbedMode::Sectioned));
	let libraries = SHADER_LIBRARIES.iter().map(|name| {
		ShaderFile::in_directory(SHADER_LIBRARY_DIRECTORY, name, EmbedMode::SingleLiteral)
	});
	shaders.chain(libraries).collect()
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
	#[serde(default = "default_declaration_type")]
	pub declaration_type: String,
	pub declaration_template: Option<String>,
	#[serde(default = "default_directives")]
	pub directives: BTreeMap<String, String>,
	#[serde(default = "default_encoding")]
	pub encoding: String,
	#[serde(default = "default_shaders")]
	pub shaders: Vec<ShaderFile>,
}

impl Default for Settings {
	fn default() -> Self {
		Settings {
			declaration_type: default_declaration_type(),
			declaration_template: None,
			directives: default_directives(),
			encoding: default_encoding(),
			shaders: default_shaders(),
		}
	}
}

impl Settings {
	pub fn load(project_directory: &Path) -> Result<Self> {
		let path = project_directory.join(SETTINGS_FILENAME);

		if !path.exists() {
			return Ok(Settings::default());
		}

		let contents = fs::read_to_string(&path).map_err(|err| Error::failed_to_read(&path, err))?;
		Self::parse(&path, &contents)
	}

	fn parse(path: &Path, contents: &str) -> Result<Self> {
		serde_yaml::from_str(contents).map_err(|err| Error::failed_to_deserialize(path, err))
	}

	/// Builds the directive map, rejecting keywords which only differ by case.
	pub fn directive_map(&self) -> Result<DirectiveMap> {
		let mut keywords = BTreeSet::new();
		for keyword in self.directives.keys() {
			if !keywords.insert(keyword.to_lowercase()) {
				return Err(Error::message(format!(
					"Directive '{}' is declared more than once.",
					keyword.to_lowercase()
				)));
			}
		}

		Ok(DirectiveMap::new(
			self.directives
				.iter()
				.map(|(keyword, identifier)| (keyword, identifier.clone())),
		))
	}

	pub fn source_encoding(&self) -> Result<EncodingRef> {
		encoding_from_whatwg_label(&self.encoding)
			.ok_or_else(|| Error::unknown_encoding(&self.encoding))
	}
}
