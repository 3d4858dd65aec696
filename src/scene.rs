use crate::{Error, Result};
use log::{debug, info};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::fs;
use std::path::Path;

const TRANSFORM_FIELDS: &[&str] = &["rotation", "translation", "scale"];

/// Removes the transform fields of every node, returning how many nodes were changed.
pub fn strip_node_transforms(scene: &mut Value) -> Result<usize> {
	let nodes = scene
		.get_mut("nodes")
		.and_then(Value::as_array_mut)
		.ok_or("Scene has no nodes array.")?;

	let mut stripped = 0;
	for (index, node) in nodes.iter_mut().enumerate() {
		if let Some(node) = node.as_object_mut() {
			let len = node.len();
			node.retain(|key, _| !TRANSFORM_FIELDS.contains(&key.as_str()));
			if node.len() != len {
				debug!("Stripped transform of node {}.", index);
				stripped += 1;
			}
		}
	}
	Ok(stripped)
}

/// Serializes with 4-space indentation, keeping key order.
pub fn to_pretty_vec(scene: &Value) -> serde_json::Result<Vec<u8>> {
	let mut contents = Vec::new();
	let formatter = PrettyFormatter::with_indent(b"    ");
	let mut serializer = Serializer::with_formatter(&mut contents, formatter);
	scene.serialize(&mut serializer)?;
	Ok(contents)
}

pub fn strip_file_transforms(path: &Path) -> Result<()> {
	let contents = fs::read_to_string(path).map_err(|err| Error::failed_to_read(path, err))?;
	let mut scene: Value =
		serde_json::from_str(&contents).map_err(|err| Error::failed_to_deserialize(path, err))?;

	let stripped = strip_node_transforms(&mut scene)?;

	let contents = to_pretty_vec(&scene).map_err(|err| Error::failed_to_serialize(path, err))?;
	fs::write(path, contents).map_err(|err| Error::failed_to_write(path, err))?;

	info!(
		"Stripped transforms of {} nodes in '{}'.",
		stripped,
		path.to_string_lossy()
	);
	Ok(())
}
