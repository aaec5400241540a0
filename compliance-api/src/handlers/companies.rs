use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use shared_types::{BulkCompanyAction, CompanyFilter, UserRole, VerificationDecision};

use crate::store::SqliteCompanyStore;
use crate::verification::{VerificationError, VerificationService};

pub type CompanyService = VerificationService<SqliteCompanyStore>;

/// Header set by the upstream auth layer with the caller's role
pub const CALLER_ROLE_HEADER: &str = "x-caller-role";

fn caller_role(req: &HttpRequest) -> Result<UserRole, VerificationError> {
    let value = req
        .headers()
        .get(CALLER_ROLE_HEADER)
        .ok_or_else(|| VerificationError::Authorization("Missing caller role".to_string()))?;

    value
        .to_str()
        .map_err(|_| VerificationError::Authorization("Invalid caller role".to_string()))?
        .parse::<UserRole>()
        .map_err(VerificationError::Authorization)
}

pub async fn list_companies(
    service: web::Data<CompanyService>,
    req: HttpRequest,
    query: web::Query<CompanyFilter>,
) -> ActixResult<HttpResponse> {
    let role = caller_role(&req)?;
    let response = service.list_companies(role, &query).await?;

    Ok(HttpResponse::Ok().json(response))
}

pub async fn get_company(
    service: web::Data<CompanyService>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let role = caller_role(&req)?;
    let company = service.get_company(role, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(company))
}

pub async fn get_company_documents(
    service: web::Data<CompanyService>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let role = caller_role(&req)?;
    let documents = service
        .get_company_documents(role, path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(documents))
}

pub async fn company_stats(
    service: web::Data<CompanyService>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    let role = caller_role(&req)?;
    let stats = service.company_stats(role).await?;

    Ok(HttpResponse::Ok().json(stats))
}

pub async fn decide_verification(
    service: web::Data<CompanyService>,
    req: HttpRequest,
    path: web::Path<i64>,
    decision: web::Json<VerificationDecision>,
) -> ActixResult<HttpResponse> {
    let role = caller_role(&req)?;
    let company = service
        .decide_verification(role, path.into_inner(), &decision)
        .await?;

    Ok(HttpResponse::Ok().json(company))
}

pub async fn bulk_action(
    service: web::Data<CompanyService>,
    req: HttpRequest,
    action: web::Json<BulkCompanyAction>,
) -> ActixResult<HttpResponse> {
    let role = caller_role(&req)?;
    let result = service.apply_bulk_action(role, &action).await?;

    Ok(HttpResponse::Ok().json(result))
}

/// Register the admin company routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/admin/companies")
            .route("", web::get().to(list_companies))
            .route("/stats", web::get().to(company_stats))
            .route("/bulk-action", web::post().to(bulk_action))
            .route("/{id}", web::get().to(get_company))
            .route("/{id}/documents", web::get().to(get_company_documents))
            .route("/{id}/verification", web::post().to(decide_verification)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{companies, Database};
    use crate::verification::testing::sample_company;
    use actix_web::{http::StatusCode, test, App};
    use shared_types::{BulkActionResult, CompaniesResponse, Company};

    async fn service_with(count: i64) -> (tempfile::TempDir, web::Data<CompanyService>) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(&dir.path().join("handlers.sqlite")).unwrap();
        for i in 0..count {
            companies::insert_company(
                db.async_connection.clone(),
                &sample_company(&format!("C{}", i), false, i),
            )
            .await
            .unwrap();
        }
        let service = CompanyService::new(SqliteCompanyStore::new(db.async_connection));
        (dir, web::Data::new(service))
    }

    #[actix_web::test]
    async fn test_list_requires_admin_role() {
        let (_dir, service) = service_with(1).await;
        let app = test::init_service(App::new().app_data(service).configure(configure)).await;

        let req = test::TestRequest::get().uri("/api/admin/companies").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::get()
            .uri("/api/admin/companies")
            .insert_header((CALLER_ROLE_HEADER, "EMPLOYER"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_list_with_query_filter() {
        let (_dir, service) = service_with(12).await;
        let app = test::init_service(App::new().app_data(service).configure(configure)).await;

        let req = test::TestRequest::get()
            .uri("/api/admin/companies?verified=false&page=2&limit=5")
            .insert_header((CALLER_ROLE_HEADER, "ADMIN"))
            .to_request();
        let body: CompaniesResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.companies.len(), 5);
        assert_eq!(body.pagination.total, 12);
        assert_eq!(body.pagination.total_pages, 3);
    }

    #[actix_web::test]
    async fn test_reject_without_notes_is_bad_request() {
        let (_dir, service) = service_with(1).await;
        let app = test::init_service(App::new().app_data(service).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/companies/1/verification")
            .insert_header((CALLER_ROLE_HEADER, "SUPER_ADMIN"))
            .set_json(VerificationDecision::reject("  "))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_approve_returns_updated_company() {
        let (_dir, service) = service_with(1).await;
        let app = test::init_service(App::new().app_data(service).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/companies/1/verification")
            .insert_header((CALLER_ROLE_HEADER, "ADMIN"))
            .set_json(VerificationDecision::approve(""))
            .to_request();
        let company: Company = test::call_and_read_body_json(&app, req).await;
        assert!(company.is_verified);

        let req = test::TestRequest::post()
            .uri("/api/admin/companies/404/verification")
            .insert_header((CALLER_ROLE_HEADER, "ADMIN"))
            .set_json(VerificationDecision::approve(""))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_bulk_reject_reports_partial_failure() {
        let (_dir, service) = service_with(2).await;
        let app = test::init_service(App::new().app_data(service).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/companies/bulk-action")
            .insert_header((CALLER_ROLE_HEADER, "ADMIN"))
            .set_json(serde_json::json!({
                "company_ids": [1, 2, 3],
                "action": "reject",
                "notes": "Registration documents expired"
            }))
            .to_request();
        let result: BulkActionResult = test::call_and_read_body_json(&app, req).await;

        assert_eq!(result.succeeded, 2);
        assert_eq!(result.failed, 1);
    }
}
