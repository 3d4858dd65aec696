use crate::scene;
use crate::Result;
use std::path::Path;

pub struct Options<'a> {
	pub project_directory: &'a Path,
	pub scene_file: &'a Path,
}

pub fn execute(options: &Options) -> Result<()> {
	scene::strip_file_transforms(&options.project_directory.join(options.scene_file))
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use tempfile::tempdir;

	#[test]
	fn test_execute_resolves_against_project_directory() {
		let directory = tempdir().unwrap();
		fs::create_dir(directory.path().join("Dragon - Copy")).unwrap();
		let path = directory.path().join("Dragon - Copy/scene.gltf");
		fs::write(
			&path,
			r#"{"nodes":[{"mesh":0,"scale":[1,1,1]}]}"#,
		)
		.unwrap();

		execute(&Options {
			project_directory: directory.path(),
			scene_file: Path::new("Dragon - Copy/scene.gltf"),
		})
		.unwrap();

		assert_eq!(
			fs::read_to_string(&path).unwrap(),
			"{\n    \"nodes\": [\n        {\n            \"mesh\": 0\n        }\n    ]\n}"
		);
	}

	#[test]
	fn test_execute_missing_scene() {
		let directory = tempdir().unwrap();

		assert!(execute(&Options {
			project_directory: directory.path(),
			scene_file: Path::new("scene.gltf"),
		})
		.is_err());
	}
}
