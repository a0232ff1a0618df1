use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// Lexically normalize `path`: drop `.` segments and fold `name/..` pairs.
/// The filesystem is never consulted, so symlinks are not resolved.
pub fn clean_path(path: &Path) -> PathBuf {
	let mut cleaned: Vec<Component<'_>> = Vec::new();

	for component in path.components() {
		match component {
			Component::CurDir => {}
			Component::ParentDir => {
				match cleaned.last() {
					Some(Component::Normal(_)) => {
						cleaned.pop();
					}
					// `/..` is `/`.
					Some(Component::RootDir | Component::Prefix(_)) => {}
					_ => cleaned.push(component),
				}
			}
			_ => cleaned.push(component),
		}
	}

	cleaned.iter().collect()
}

/// Compute the path of `target` relative to the directory `base` without
/// touching the filesystem.
///
/// Returns `None` when one path is absolute and the other is not, or when
/// `base` has `..` segments that cannot be walked back from `target`.
pub fn relative_path(base: &Path, target: &Path) -> Option<PathBuf> {
	let base = clean_path(base);
	let target = clean_path(target);

	if base.has_root() != target.has_root() {
		return None;
	}

	let base_components: Vec<_> = base.components().collect();
	let target_components: Vec<_> = target.components().collect();
	let common = base_components
		.iter()
		.zip(&target_components)
		.take_while(|(a, b)| a == b)
		.count();

	let remaining_base = &base_components[common..];
	if remaining_base.contains(&Component::ParentDir) {
		return None;
	}

	let mut relative = PathBuf::new();
	for _ in remaining_base {
		relative.push("..");
	}
	for component in &target_components[common..] {
		relative.push(component.as_os_str());
	}

	if relative.as_os_str().is_empty() {
		relative.push(".");
	}

	Some(relative)
}

/// Render `path` with `/` separators regardless of the host platform.
pub fn to_slash(path: &Path) -> String {
	let mut rendered = String::new();

	for component in path.components() {
		match component {
			Component::Prefix(prefix) => rendered.push_str(&prefix.as_os_str().to_string_lossy()),
			Component::RootDir => rendered.push('/'),
			other => {
				if !rendered.is_empty() && !rendered.ends_with('/') {
					rendered.push('/');
				}
				rendered.push_str(&other.as_os_str().to_string_lossy());
			}
		}
	}

	rendered
}
