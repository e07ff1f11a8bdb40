//! OpenAPI components document for the domain type contract.
//!
//! No routes are served from this crate; the document only publishes the
//! JSON shapes shared by request, response and persistence boundaries. It is
//! exported with `cargo run --bin contract-schema`.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    ActivitySchema, BudgetTierSchema, CrowdDataSchema, CrowdLevelSchema, DayPlanSchema,
    DomainErrorSchema, EmployeeSchema, EmployeeStatusSchema, ErrorCodeSchema, EventDataSchema,
    ForecastDaySchema, GeoPointSchema, ItinerarySchema, TripPreferencesSchema, UserPreferencesSchema,
    UserSchema, WeatherDataSchema,
};

/// OpenAPI document listing every contract schema.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Travel planner domain contract",
        description = "JSON shapes for travellers, itineraries, external feeds and support staff."
    ),
    components(schemas(
        ErrorCodeSchema,
        DomainErrorSchema,
        BudgetTierSchema,
        CrowdLevelSchema,
        EmployeeStatusSchema,
        UserPreferencesSchema,
        UserSchema,
        GeoPointSchema,
        ActivitySchema,
        DayPlanSchema,
        ItinerarySchema,
        TripPreferencesSchema,
        ForecastDaySchema,
        WeatherDataSchema,
        EventDataSchema,
        CrowdDataSchema,
        EmployeeSchema,
    ))
)]
pub struct ContractDoc;

impl ContractDoc {
    /// Render the document as JSON.
    ///
    /// # Errors
    ///
    /// Returns the serialiser error if rendering fails.
    pub fn render(pretty: bool) -> Result<String, serde_json::Error> {
        let doc = Self::openapi();
        if pretty {
            doc.to_pretty_json()
        } else {
            doc.to_json()
        }
    }
}
