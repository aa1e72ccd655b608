use nixplat::os::{
    IdentifyOptions, IdentifyStatus, LinuxVersion, OsFamily, OsVersionNumber, identify,
};
use nixplat::test_utils::{fixtures, init_test_logging, issue_file_options};
use tempfile::TempDir;

#[test]
fn test_every_known_system_is_identified() {
    init_test_logging(None);
    let options = IdentifyOptions::default();

    for (uname, family) in fixtures::known_systems() {
        let id = identify(&uname, &options);
        assert_eq!(id.status, IdentifyStatus::Success, "{}", uname.sysname);
        assert_eq!(id.version.family(), family, "{}", uname.sysname);
        assert!(!id.name.is_empty(), "{}", uname.sysname);
    }
}

#[test]
fn test_ubuntu_release() {
    let temp = TempDir::new().unwrap();
    let options = issue_file_options(temp.path(), "Ubuntu 22.04.3 LTS \\n \\l\n");

    let id = identify(&fixtures::ubuntu_2204(), &options);
    assert_eq!(
        id.version,
        OsVersionNumber::Linux(LinuxVersion {
            kernel: 5,
            major: 15,
            minor: 0,
            security_and_bug_fixes: 76,
        })
    );
    assert!(id.name.starts_with("Ubuntu 22.04.3 LTS"));
}

#[test]
fn test_darwin_and_unsupported() {
    let options = IdentifyOptions::default();

    let mac = identify(&fixtures::el_capitan(), &options);
    assert_eq!(mac.name.as_str(), "OS X 10.11 El Capitan");

    let plan9 = identify(&fixtures::plan9(), &options);
    assert_eq!(plan9.status, IdentifyStatus::NotSupported);
    assert_eq!(plan9.version, OsVersionNumber::Unknown);
    assert_eq!(plan9.version.family(), OsFamily::Unknown);
    assert!(plan9.name.is_empty());
}

#[test]
fn test_running_system_is_not_an_error() {
    let id = nixplat::os::get_os_version_and_name().unwrap();
    assert!(id.name.len() < nixplat::constants::OS_NAME_SIZE);
}
