// ============================================================================
// Onboarding Core - Built-in Navigation Catalog
// File: crates/onboarding-core/src/catalog/builtin.rs
// Description: Default navigation actions shipped with the service
// ============================================================================

use crate::domain::navigation_action::*;
use crate::domain::role::*;

// Sequence numbers decide display order. Order of the constants matters!
pub const HOME_SEQUENCE: u32 = 1;
pub const ROLE_SEQUENCE: u32 = 2;
pub const ROLE_CREATION_SEQUENCE: u32 = 3;
pub const ROLE_VIEWING_SEQUENCE: u32 = 4;
pub const REQUESTS_SEQUENCE: u32 = 5;
pub const PARTNER_SEQUENCE: u32 = 6;
pub const CONSUMER_SEQUENCE: u32 = 7;
pub const EMPLOYEE_SEQUENCE: u32 = 8;
pub const EMPLOYEE_SEARCH_SEQUENCE: u32 = 9;
pub const EMPLOYEE_REGISTRATION_SEQUENCE: u32 = 10;
pub const AGENT_SEQUENCE: u32 = 11;
pub const AGENT_SEARCH_SEQUENCE: u32 = 12;
pub const AGENT_REGISTRATION_SEQUENCE: u32 = 13;
pub const PATIENT_SEQUENCE: u32 = 14;
pub const PATIENT_SEARCH_SEQUENCE: u32 = 15;
pub const PATIENT_REGISTRATION_SEQUENCE: u32 = 16;
pub const HELP_SEQUENCE: u32 = 17;

pub const HOME_TITLE: &str = "Home";
pub const HELP_TITLE: &str = "Help";
pub const REQUESTS_TITLE: &str = "Requests";
pub const PARTNER_TITLE: &str = "Partners";
pub const CONSUMER_TITLE: &str = "Consumers";
pub const AGENT_TITLE: &str = "Agents";
pub const AGENT_REGISTRATION_TITLE: &str = "Agent Registration";
pub const AGENT_IDENTIFICATION_TITLE: &str = "Agent Identification";
pub const EMPLOYEE_TITLE: &str = "Employees";
pub const EMPLOYEE_REGISTRATION_TITLE: &str = "Employee Registration";
pub const EMPLOYEE_IDENTIFICATION_TITLE: &str = "Employee Identification";
pub const PATIENT_TITLE: &str = "Patients";
pub const PATIENT_REGISTRATION_TITLE: &str = "Patient Registration";
pub const PATIENT_IDENTIFICATION_TITLE: &str = "Patient Identification";
pub const ROLE_TITLE: &str = "Roles";
pub const ROLE_CREATION_TITLE: &str = "Create Role";
pub const ROLE_VIEW_TITLE: &str = "View Roles";

const ICON_BASE: &str = "/assets/navigation";

fn icon(name: &str) -> String {
    format!("{}/{}.svg", ICON_BASE, name)
}

fn requires(scope: &str) -> Permission {
    Permission::from_scope(scope)
}

/// All actions in declaration order; parents come before their children.
pub fn all_navigation_actions() -> Vec<NavigationAction> {
    vec![
        NavigationAction::parent(HOME_GROUP, HOME_TITLE)
            .with_route("/home")
            .with_icon(icon("home"))
            .with_sequence(HOME_SEQUENCE)
            .high_priority(),
        NavigationAction::parent(HELP_GROUP, HELP_TITLE)
            .with_route("/helpCenter")
            .with_icon(icon("help"))
            .with_sequence(HELP_SEQUENCE),

        NavigationAction::parent(KYC_GROUP, REQUESTS_TITLE)
            .with_route("/adminRequests")
            .with_icon(icon("requests"))
            .with_permission(requires(CAN_PROCESS_KYC))
            .with_sequence(REQUESTS_SEQUENCE),
        // Partner and consumer screens have no route yet.
        NavigationAction::parent(PARTNER_GROUP, PARTNER_TITLE)
            .with_icon(icon("partners"))
            .with_permission(requires(CAN_VIEW_PARTNER))
            .with_sequence(PARTNER_SEQUENCE),
        NavigationAction::parent(CONSUMER_GROUP, CONSUMER_TITLE)
            .with_icon(icon("consumers"))
            .with_permission(requires(CAN_VIEW_CONSUMERS))
            .with_sequence(CONSUMER_SEQUENCE),

        NavigationAction::parent(AGENT_GROUP, AGENT_TITLE)
            .with_icon(icon("agents"))
            .with_permission(requires(CAN_VIEW_AGENT))
            .with_sequence(AGENT_SEQUENCE),
        NavigationAction::child(AGENT_GROUP, AGENT_REGISTRATION_TITLE)
            .with_route("/agentSignup")
            .with_permission(requires(CAN_REGISTER_AGENT))
            .with_sequence(AGENT_REGISTRATION_SEQUENCE),
        NavigationAction::child(AGENT_GROUP, AGENT_IDENTIFICATION_TITLE)
            .with_route("/agentIdentification")
            .with_permission(requires(CAN_IDENTIFY_AGENT))
            .with_sequence(AGENT_SEARCH_SEQUENCE),

        NavigationAction::parent(EMPLOYEE_GROUP, EMPLOYEE_TITLE)
            .with_icon(icon("employees"))
            .with_permission(requires(CAN_VIEW_EMPLOYEE))
            .with_sequence(EMPLOYEE_SEQUENCE),
        NavigationAction::child(EMPLOYEE_GROUP, EMPLOYEE_REGISTRATION_TITLE)
            .with_route("/employeeSignup")
            .with_permission(requires(CAN_CREATE_EMPLOYEE))
            .with_sequence(EMPLOYEE_REGISTRATION_SEQUENCE),
        NavigationAction::child(EMPLOYEE_GROUP, EMPLOYEE_IDENTIFICATION_TITLE)
            .with_route("/employeeIdentification")
            .with_permission(requires(CAN_VIEW_EMPLOYEE))
            .with_sequence(EMPLOYEE_SEARCH_SEQUENCE),

        NavigationAction::parent(PATIENT_GROUP, PATIENT_TITLE)
            .with_icon(icon("patients"))
            .with_permission(requires(CAN_VIEW_PATIENT))
            .with_sequence(PATIENT_SEQUENCE),
        NavigationAction::child(PATIENT_GROUP, PATIENT_REGISTRATION_TITLE)
            .with_route("/patientRegistration")
            .with_permission(requires(CAN_CREATE_PATIENT))
            .with_sequence(PATIENT_REGISTRATION_SEQUENCE),
        NavigationAction::child(PATIENT_GROUP, PATIENT_IDENTIFICATION_TITLE)
            .with_route("/patientIdentification")
            .with_permission(requires(CAN_IDENTIFY_PATIENT))
            .with_sequence(PATIENT_SEARCH_SEQUENCE),

        NavigationAction::parent(ROLE_GROUP, ROLE_TITLE)
            .with_icon(icon("roles"))
            .with_permission(requires(CAN_VIEW_ROLE))
            .with_sequence(ROLE_SEQUENCE),
        NavigationAction::child(ROLE_GROUP, ROLE_CREATION_TITLE)
            .with_route("/createRole")
            .with_permission(requires(CAN_CREATE_ROLE))
            .with_sequence(ROLE_CREATION_SEQUENCE),
        NavigationAction::child(ROLE_GROUP, ROLE_VIEW_TITLE)
            .with_route("/viewCreatedRoles")
            .with_permission(requires(CAN_VIEW_ROLE))
            .with_sequence(ROLE_VIEWING_SEQUENCE),
    ]
}
