use shared_types::*;
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut types = Vec::new();

    // Company types
    types.push(clean_type(Company::export_to_string()?));
    types.push(clean_type(CompanyOwner::export_to_string()?));
    types.push(clean_type(CompanyLocation::export_to_string()?));
    types.push(clean_type(CompanyFilter::export_to_string()?));
    types.push(clean_type(Pagination::export_to_string()?));
    types.push(clean_type(CompaniesResponse::export_to_string()?));
    types.push(clean_type(CompanyStats::export_to_string()?));

    // Document types
    types.push(clean_type(CompanyDocument::export_to_string()?));
    types.push(clean_type(DocumentType::export_to_string()?));
    types.push(clean_type(DocumentVerificationStatus::export_to_string()?));
    types.push(clean_type(ComplianceStatus::export_to_string()?));
    types.push(clean_type(ComplianceReport::export_to_string()?));
    types.push(clean_type(CompanyDocumentsResponse::export_to_string()?));

    // Verification types
    types.push(clean_type(VerificationDecision::export_to_string()?));
    types.push(clean_type(BulkActionKind::export_to_string()?));
    types.push(clean_type(BulkCompanyAction::export_to_string()?));
    types.push(clean_type(BulkItemFailure::export_to_string()?));
    types.push(clean_type(BulkActionResult::export_to_string()?));
    types.push(clean_type(UserRole::export_to_string()?));
    types.push(clean_type(ErrorResponse::export_to_string()?));

    let output_dir = Path::new("../gui/src/api-types");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    // All types land in one file, so cross-type imports are dropped
    let filtered: Vec<&str> = type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
