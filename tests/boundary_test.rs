use semver_update::boundary::BoundaryWarning;
use semver_update::ui::formatter::format_boundary_warning;

// ============================================================================
// BoundaryWarning Display Tests
// ============================================================================

#[test]
fn test_boundary_warning_module_not_processed_display() {
    let warning = BoundaryWarning::ModuleNotProcessed {
        location: "services/api/VERSION".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("will not be processed"),
        "Message should explain the skip, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("services/api/VERSION"),
        "Message should contain the location, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("--process-module"),
        "Message should point at the flag, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_inherited_version_display() {
    let warning = BoundaryWarning::InheritedVersion {
        location: "child/VERSION".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("inherited"),
        "Message should mention inheritance, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("child/VERSION"),
        "Message should contain the location, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_equality() {
    let a = BoundaryWarning::InheritedVersion {
        location: "a".to_string(),
    };
    let b = BoundaryWarning::InheritedVersion {
        location: "a".to_string(),
    };
    let c = BoundaryWarning::ModuleNotProcessed {
        location: "a".to_string(),
    };
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_boundary_warning_formatted_for_user() {
    let warning = BoundaryWarning::ModuleNotProcessed {
        location: "lib/VERSION".to_string(),
    };
    let formatted = format_boundary_warning(&warning);
    assert!(formatted.contains("WARNING"));
    assert!(formatted.contains(&warning.to_string()));
}
