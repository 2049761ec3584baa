#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;

use pathname::{path_exists, PathError};
use tempfile::tempdir;

#[test]
fn created_file_exists() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let f = tmp.path().join("test");
    fs::File::create(&f)?;
    assert!(path_exists(&f.to_string_lossy())?);
    Ok(())
}

#[test]
fn absent_file_does_not_exist() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let f = tmp.path().join("noexist");
    assert!(!path_exists(&f.to_string_lossy())?);
    Ok(())
}

// A directory with write-only permission cannot be searched, so stat on
// anything inside it fails with EACCES rather than ENOENT.
#[test]
fn unreadable_parent_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    if nix::unistd::geteuid().is_root() {
        // root bypasses directory permissions
        return Ok(());
    }

    let tmp = tempdir()?;
    let noread = tmp.path().join("noread");
    fs::create_dir_all(&noread)?;
    fs::File::create(noread.join("test"))?;
    fs::set_permissions(&noread, fs::Permissions::from_mode(0o200))?;

    let present = path_exists(&noread.join("test").to_string_lossy());
    let absent = path_exists(&noread.join("noexist").to_string_lossy());

    fs::set_permissions(&noread, fs::Permissions::from_mode(0o700))?;

    for res in [present, absent] {
        match res {
            Err(PathError::Stat { source, .. }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied)
            }
            other => panic!("expected a stat error, got {:?}", other),
        }
    }
    Ok(())
}

#[test]
fn tilde_paths_are_expanded_before_stat() -> Result<(), Box<dyn std::error::Error>> {
    let home = match nix::unistd::User::from_uid(nix::unistd::getuid()) {
        Ok(Some(u)) => u.dir,
        _ => return Ok(()),
    };
    assert_eq!(path_exists("~")?, home.exists());
    Ok(())
}
