//! git2 fixtures

use std::path::Path;

use git2::{FileMode, IndexAddOption, Oid, Repository, Signature};

/// Initialise an empty repository at `path`
pub fn init_repo(path: &Path) -> Repository {
    Repository::init(path).expect("Failed to init repository")
}

/// Stage every change in the work tree (including deletions) and commit.
///
/// Returns the full commit id.
pub fn commit_all(repo: &Repository, message: &str) -> String {
    let mut index = repo.index().expect("Failed to open index");
    index
        .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
        .expect("Failed to stage files");
    index
        .update_all(["*"].iter(), None)
        .expect("Failed to stage deletions");
    index.write().expect("Failed to write index");

    let tree_id = index.write_tree().expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");
    let sig = Signature::now("Revship Test", "test@example.com").expect("Failed to build signature");

    let parents: Vec<git2::Commit> = repo
        .head()
        .ok()
        .and_then(|head| head.peel_to_commit().ok())
        .into_iter()
        .collect();
    let parent_refs: Vec<&git2::Commit> = parents.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .expect("Failed to commit")
        .to_string()
}

/// Like [`commit_all`], plus a submodule entry at `path` pointing at HEAD.
///
/// The index is left without the entry, so the next [`commit_all`] drops it.
pub fn commit_with_submodule(repo: &Repository, message: &str, path: &str) -> String {
    let mut index = repo.index().expect("Failed to open index");
    index
        .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
        .expect("Failed to stage files");
    index.write().expect("Failed to write index");
    let base_id = index.write_tree().expect("Failed to write tree");
    let base = repo.find_tree(base_id).expect("Failed to find tree");

    let parent = repo
        .head()
        .and_then(|head| head.peel_to_commit())
        .expect("Submodule commit needs a parent");
    let mut builder = repo.treebuilder(Some(&base)).expect("Failed to open tree builder");
    builder
        .insert(path, parent.id(), i32::from(FileMode::Commit))
        .expect("Failed to insert submodule entry");
    let tree_id = builder.write().expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");
    let sig = Signature::now("Revship Test", "test@example.com").expect("Failed to build signature");

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &[&parent])
        .expect("Failed to commit")
        .to_string()
}

/// Point the current branch at a fake `origin/main` at `revision`
pub fn set_upstream(repo: &Repository, revision: &str) {
    let oid = Oid::from_str(revision).expect("Invalid revision");
    repo.reference("refs/remotes/origin/main", oid, true, "test upstream")
        .expect("Failed to create remote-tracking ref");
    repo.remote("origin", "https://example.invalid/site.git")
        .expect("Failed to add remote");

    let branch = repo
        .head()
        .expect("Failed to read HEAD")
        .shorthand()
        .expect("Branch name is not UTF-8")
        .to_string();
    let mut config = repo.config().expect("Failed to open config");
    config
        .set_str(&format!("branch.{}.remote", branch), "origin")
        .expect("Failed to set branch remote");
    config
        .set_str(&format!("branch.{}.merge", branch), "refs/heads/main")
        .expect("Failed to set branch merge");
}
