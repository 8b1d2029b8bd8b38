//! Git repository operations

use std::path::Path;

use anyhow::{Context, Result};
use git2::{DiffOptions, ErrorCode, Repository, Sort};
use tracing::debug;

use crate::coach::ExtensionCounts;
use crate::git::diffstat::extension_of;

/// Git repository wrapper
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Looks for a repository at `path` or any parent directory.
    ///
    /// Returns `Ok(None)` when there is no repository at all; other failures
    /// mean a repository exists but cannot be read.
    pub fn discover<P: AsRef<Path>>(path: P) -> std::result::Result<Option<Self>, git2::Error> {
        match Repository::discover(path.as_ref()) {
            Ok(repo) => Ok(Some(Self { repo })),
            Err(e) if e.code() == ErrorCode::NotFound => {
                debug!(path = %path.as_ref().display(), "No git repository found");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Get workdir path
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Summaries of the latest `count` commits reachable from HEAD, newest first.
    ///
    /// A repository without commits yields an empty list.
    pub fn recent_commit_summaries(&self, count: usize) -> Result<Vec<String>> {
        match self.repo.head() {
            Ok(_) => {}
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                debug!("HEAD is unborn, repository has no commits");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e).context("Failed to get HEAD reference"),
        }

        let mut walker = self.repo.revwalk().context("Failed to create revwalk")?;
        walker
            .set_sorting(Sort::TOPOLOGICAL | Sort::TIME)
            .context("Failed to set revwalk sorting")?;
        walker.push_head().context("Failed to push HEAD")?;

        let mut summaries = Vec::with_capacity(count.min(256));
        for oid in walker.take(count) {
            let oid = oid.context("Failed to get commit OID from walker")?;
            let commit = self
                .repo
                .find_commit(oid)
                .context("Failed to find commit")?;
            summaries.push(commit.summary().unwrap_or_default().to_string());
        }

        debug!(requested = count, found = summaries.len(), "Read commit summaries");
        Ok(summaries)
    }

    /// Counts files changed between `base` and HEAD per extension.
    ///
    /// When `base` does not resolve (for example a short history has no
    /// `HEAD~10`) the counts are empty.
    pub fn changed_extension_counts(&self, base: &str) -> Result<ExtensionCounts> {
        let base_tree = match self.repo.revparse_single(base) {
            Ok(obj) => obj
                .peel_to_tree()
                .with_context(|| format!("Failed to peel {base} to a tree"))?,
            Err(e) => {
                debug!(base, error = %e, "Diff base not found, skipping extension counts");
                return Ok(ExtensionCounts::new());
            }
        };
        let head_tree = self
            .repo
            .head()
            .context("Failed to get HEAD reference")?
            .peel_to_tree()
            .context("Failed to peel HEAD to a tree")?;

        let mut opts = DiffOptions::new();
        let diff = self
            .repo
            .diff_tree_to_tree(Some(&base_tree), Some(&head_tree), Some(&mut opts))
            .context("Failed to create diff")?;

        let mut counts = ExtensionCounts::new();
        for delta in diff.deltas() {
            let path = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .and_then(Path::to_str);
            if let Some(ext) = path.and_then(extension_of) {
                *counts.entry(ext.to_string()).or_insert(0) += 1;
            }
        }

        debug!(base, extensions = counts.len(), "Computed extension counts");
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Signature;
    use std::fs;
    use tempfile::TempDir;

    fn commit_file(repo: &Repository, dir: &Path, name: &str, message: &str) {
        fs::write(dir.join(name), message).unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = Signature::now("Test User", "test@example.com").unwrap();
        let parents: Vec<git2::Commit> = match repo.head() {
            Ok(head) => vec![head.peel_to_commit().unwrap()],
            Err(_) => Vec::new(),
        };
        let parent_refs: Vec<&git2::Commit> = parents.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
            .unwrap();
    }

    #[test]
    fn empty_repository_has_no_summaries() {
        let dir = TempDir::new().unwrap();
        Repository::init(dir.path()).unwrap();
        let repo = GitRepository::discover(dir.path()).unwrap().unwrap();
        assert!(repo.recent_commit_summaries(30).unwrap().is_empty());
    }

    #[test]
    fn summaries_newest_first_and_limited() {
        let dir = TempDir::new().unwrap();
        let raw = Repository::init(dir.path()).unwrap();
        commit_file(&raw, dir.path(), "a.py", "add parser");
        commit_file(&raw, dir.path(), "b.py", "fix parser bug\n\nlong body");
        commit_file(&raw, dir.path(), "c.rs", "refactor lexer");

        let repo = GitRepository::discover(dir.path()).unwrap().unwrap();
        let summaries = repo.recent_commit_summaries(2).unwrap();
        assert_eq!(summaries, vec!["refactor lexer", "fix parser bug"]);
    }

    #[test]
    fn extension_counts_between_revisions() {
        let dir = TempDir::new().unwrap();
        let raw = Repository::init(dir.path()).unwrap();
        commit_file(&raw, dir.path(), "base.txt", "initial");
        commit_file(&raw, dir.path(), "a.py", "add a");
        commit_file(&raw, dir.path(), "b.py", "add b");
        commit_file(&raw, dir.path(), "main.go", "add main");

        let repo = GitRepository::discover(dir.path()).unwrap().unwrap();
        let counts = repo.changed_extension_counts("HEAD~3").unwrap();
        assert_eq!(counts.get("py"), Some(&2));
        assert_eq!(counts.get("go"), Some(&1));
        assert_eq!(counts.get("txt"), None);
    }

    #[test]
    fn unresolvable_base_gives_empty_counts() {
        let dir = TempDir::new().unwrap();
        let raw = Repository::init(dir.path()).unwrap();
        commit_file(&raw, dir.path(), "a.py", "add a");

        let repo = GitRepository::discover(dir.path()).unwrap().unwrap();
        assert!(repo.changed_extension_counts("HEAD~10").unwrap().is_empty());
    }

    #[test]
    fn discover_outside_repository() {
        let dir = TempDir::new().unwrap();
        // A temp dir may itself live inside a repository on some machines.
        if Repository::discover(dir.path()).is_err() {
            assert!(GitRepository::discover(dir.path()).unwrap().is_none());
        }
    }
}
