pub mod bu_vulnerability_record;
pub mod risk_distribution_record;
pub mod compliance_gap_record;
pub mod attack_surface_record;
