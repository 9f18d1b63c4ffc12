use axum::{
    Router,
    extract::{FromRequest, Request, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::{
    GreenPathError,
    models::{Budget, DEFAULT_DAYS, Destination, ItineraryResult, MAX_DAYS, MIN_DAYS, Priority, TripRequest},
    planner::Planner,
};

#[derive(Serialize, Deserialize)]
pub struct ApiDefaults {
    pub destination: Destination,
    pub days: u32,
    pub budget: Budget,
    pub priorities: Vec<Priority>,
}

#[derive(Serialize, Deserialize)]
pub struct ApiOptions {
    pub destinations: Vec<Destination>,
    pub budgets: Vec<Budget>,
    pub priorities: Vec<Priority>,
    pub min_days: u32,
    pub max_days: u32,
    pub defaults: ApiDefaults,
}

impl ApiOptions {
    fn current() -> Self {
        let defaults = TripRequest::default();
        Self {
            destinations: Destination::ALL.to_vec(),
            budgets: Budget::ALL.to_vec(),
            priorities: Priority::ALL.to_vec(),
            min_days: MIN_DAYS,
            max_days: MAX_DAYS,
            defaults: ApiDefaults {
                destination: defaults.destination(),
                days: DEFAULT_DAYS,
                budget: defaults.budget(),
                priorities: defaults.priorities().to_vec(),
            },
        }
    }
}

/// Form submission; choices accept either labels or slugs
#[derive(Serialize, Deserialize)]
pub struct ApiTripForm {
    pub destination: Destination,
    pub days: u32,
    pub budget: Budget,
    #[serde(default)]
    pub priorities: Vec<Priority>,
}

#[derive(Serialize, Deserialize)]
pub struct ApiItinerary {
    pub itinerary: String,
    pub carbon_footprint_kg: u32,
    pub footprint_message: String,
    pub export_filename: String,
}

impl From<ItineraryResult> for ApiItinerary {
    fn from(result: ItineraryResult) -> Self {
        Self {
            footprint_message: result.footprint_message(),
            carbon_footprint_kg: result.carbon_footprint_kg,
            export_filename: result.export_filename,
            itinerary: result.raw_text,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl IntoResponse for GreenPathError {
    fn into_response(self) -> Response {
        let status = match &self {
            GreenPathError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            GreenPathError::MissingCredential => StatusCode::SERVICE_UNAVAILABLE,
            GreenPathError::UpstreamFailure { .. } => StatusCode::BAD_GATEWAY,
            GreenPathError::Config { .. } | GreenPathError::Io { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ApiError {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// JSON body extractor whose rejections use the `{error}` envelope
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = GreenPathError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| GreenPathError::validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}

pub fn router(planner: Planner) -> Router {
    Router::new()
        .route("/options", get(get_options))
        .route("/itinerary", post(create_itinerary))
        .with_state(planner)
}

async fn get_options() -> Json<ApiOptions> {
    Json(ApiOptions::current())
}

async fn create_itinerary(
    State(planner): State<Planner>,
    ApiJson(form): ApiJson<ApiTripForm>,
) -> Result<Json<ApiItinerary>, GreenPathError> {
    let trip = TripRequest::new(form.destination, form.days, form.budget, form.priorities)?;
    let result = planner.plan(&trip).await?;
    Ok(Json(ApiItinerary::from(result)))
}
