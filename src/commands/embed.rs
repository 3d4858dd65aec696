use crate::embedder::Embedder;
use crate::settings::Settings;
use crate::Result;
use log::info;
use std::path::Path;

pub struct Options<'a> {
	pub project_directory: &'a Path,
}

pub fn execute(options: &Options) -> Result<()> {
	let settings = Settings::load(options.project_directory)?;
	let embedder = Embedder::new(&settings)?;

	for shader in &settings.shaders {
		embedder.embed(options.project_directory, shader)?;
	}

	info!("Embedded {} shaders.", settings.shaders.len());
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::settings::SETTINGS_FILENAME;
	use std::fs;
	use tempfile::tempdir;

	#[test]
	fn test_execute() {
		let directory = tempdir().unwrap();
		fs::create_dir(directory.path().join("include")).unwrap();
		fs::write(
			directory.path().join(SETTINGS_FILENAME),
			r#"shaders:
  - source: Sky.shader
    output: include/Sky.h
  - source: Constants.shader
    output: include/Constants.h
    mode: single-literal
"#,
		)
		.unwrap();
		fs::write(
			directory.path().join("Sky.shader"),
			"#shader vertex\nvoid main() {}\n#shader fragment\nout vec4 c;\n",
		)
		.unwrap();
		fs::write(
			directory.path().join("Constants.shader"),
			"const float PI = 3.14159;\n",
		)
		.unwrap();

		execute(&Options {
			project_directory: directory.path(),
		})
		.unwrap();

		assert_eq!(
			fs::read_to_string(directory.path().join("include/Sky.h")).unwrap(),
			"std::string vertexShaderSource =\n\t\"void main() {}\\n\";\n\
			 std::string fragmentShaderSource =\n\t\"out vec4 c;\\n\";\n"
		);
		assert_eq!(
			fs::read_to_string(directory.path().join("include/Constants.h")).unwrap(),
			"\"const float PI = 3.14159;\\n\"\n"
		);
	}

	#[test]
	fn test_execute_stops_at_first_failure() {
		let directory = tempdir().unwrap();
		fs::write(
			directory.path().join(SETTINGS_FILENAME),
			r#"shaders:
  - source: Missing.shader
    output: Missing.h
  - source: Blur.shader
    output: Blur.h
"#,
		)
		.unwrap();
		fs::write(directory.path().join("Blur.shader"), "#shader vertex\n").unwrap();

		let result = execute(&Options {
			project_directory: directory.path(),
		});

		assert!(result.is_err());
		assert!(!directory.path().join("Blur.h").exists());
	}
}
