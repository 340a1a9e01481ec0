use crate::error::{IndexifyError, Result};
use jwalk::WalkDir;
use std::path::{Path, PathBuf};

/// Check whether `path` ends in one of `extensions` (case-insensitive).
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
	path.extension()
		.and_then(|ext| ext.to_str())
		.is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// Documents found under a build directory, plus entries that could not be read.
#[derive(Debug, Default)]
pub struct DocumentWalk {
	/// Matching documents, sorted so reports are stable between runs.
	pub documents: Vec<PathBuf>,

	/// Entries the walk could not read. The rest of the tree is still walked.
	pub errors: Vec<(PathBuf, IndexifyError)>,
}

/// Collect every file under `root` with one of `extensions`.
///
/// Symlinks to files are included; symlinked directories are not descended
/// into. Only a missing or non-directory `root` is an error.
pub fn collect_documents(root: &Path, extensions: &[String]) -> Result<DocumentWalk> {
	if !root.is_dir() {
		return Err(IndexifyError::RootNotFound {
			path: root.to_path_buf(),
		});
	}

	let mut walk = DocumentWalk::default();

	for entry in WalkDir::new(root).skip_hidden(false) {
		let entry = match entry {
			Ok(entry) => entry,
			Err(e) => {
				let path = e.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
				walk.errors.push((
					path.clone(),
					IndexifyError::WalkError {
						path,
						source: std::io::Error::other(e),
					},
				));
				continue;
			}
		};

		let path = entry.path();
		if !is_document_file(&entry.file_type(), &path) {
			continue;
		}

		if has_extension(&path, extensions) {
			walk.documents.push(path);
		}
	}

	walk.documents.sort();
	Ok(walk)
}

fn is_document_file(file_type: &std::fs::FileType, path: &Path) -> bool {
	file_type.is_file() || (file_type.is_symlink() && path.is_file())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	fn html() -> Vec<String> {
		vec!["html".to_string()]
	}

	#[test]
	fn test_has_extension() {
		assert!(has_extension(Path::new("a/index.html"), &html()));
		assert!(has_extension(Path::new("a/INDEX.HTML"), &html()));
		assert!(!has_extension(Path::new("a/style.css"), &html()));
		assert!(!has_extension(Path::new("a/html"), &html()));
		assert!(!has_extension(Path::new("a/page.htm"), &html()));
	}

	#[test]
	fn test_collect_nested_documents() {
		let temp_dir = tempfile::tempdir().unwrap();
		let root = temp_dir.path();
		fs::create_dir_all(root.join("blog/post")).unwrap();
		fs::write(root.join("index.html"), "").unwrap();
		fs::write(root.join("blog/index.html"), "").unwrap();
		fs::write(root.join("blog/post/index.html"), "").unwrap();
		fs::write(root.join("blog/style.css"), "").unwrap();
		fs::write(root.join("sitemap.xml"), "").unwrap();

		let documents = collect_documents(root, &html()).unwrap().documents;
		assert_eq!(
			documents,
			vec![
				root.join("blog/index.html"),
				root.join("blog/post/index.html"),
				root.join("index.html"),
			]
		);
	}

	#[test]
	fn test_collect_includes_hidden_directories() {
		let temp_dir = tempfile::tempdir().unwrap();
		let root = temp_dir.path();
		fs::create_dir_all(root.join(".well-known")).unwrap();
		fs::write(root.join(".well-known/page.html"), "").unwrap();

		let documents = collect_documents(root, &html()).unwrap().documents;
		assert_eq!(documents, vec![root.join(".well-known/page.html")]);
	}

	#[test]
	fn test_collect_multiple_extensions() {
		let temp_dir = tempfile::tempdir().unwrap();
		let root = temp_dir.path();
		fs::write(root.join("a.html"), "").unwrap();
		fs::write(root.join("b.htm"), "").unwrap();
		fs::write(root.join("c.txt"), "").unwrap();

		let extensions = vec!["html".to_string(), "htm".to_string()];
		let documents = collect_documents(root, &extensions).unwrap().documents;
		assert_eq!(documents, vec![root.join("a.html"), root.join("b.htm")]);
	}

	#[test]
	fn test_collect_skips_directories_named_like_documents() {
		let temp_dir = tempfile::tempdir().unwrap();
		let root = temp_dir.path();
		fs::create_dir_all(root.join("odd.html")).unwrap();

		let documents = collect_documents(root, &html()).unwrap().documents;
		assert!(documents.is_empty());
	}

	#[cfg(unix)]
	#[test]
	fn test_collect_follows_file_symlinks() {
		let temp_dir = tempfile::tempdir().unwrap();
		let root = temp_dir.path().join("public");
		let shared = temp_dir.path().join("shared");
		fs::create_dir_all(&root).unwrap();
		fs::create_dir_all(&shared).unwrap();
		fs::write(shared.join("page.html"), "").unwrap();
		fs::write(shared.join("nested.html"), "").unwrap();

		std::os::unix::fs::symlink(shared.join("page.html"), root.join("page.html")).unwrap();
		std::os::unix::fs::symlink(&shared, root.join("linked-dir")).unwrap();
		std::os::unix::fs::symlink(root.join("gone.html"), root.join("dangling.html")).unwrap();

		let walk = collect_documents(&root, &html()).unwrap();
		assert_eq!(walk.documents, vec![root.join("page.html")]);
		assert!(walk.errors.is_empty());
	}

	#[test]
	fn test_collect_missing_root() {
		let temp_dir = tempfile::tempdir().unwrap();
		let missing = temp_dir.path().join("public");

		match collect_documents(&missing, &html()).unwrap_err() {
			IndexifyError::RootNotFound { path } => assert_eq!(path, missing),
			_ => panic!("Expected RootNotFound error"),
		}
	}

	#[test]
	fn test_collect_root_is_a_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let file = temp_dir.path().join("index.html");
		fs::write(&file, "").unwrap();

		assert!(matches!(
			collect_documents(&file, &html()),
			Err(IndexifyError::RootNotFound { .. })
		));
	}
}
