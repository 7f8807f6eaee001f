use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::accounts::Profile;
use crate::ids::AccountId;
use mercury_auth::Role;

/// Aggregated view of one student for staff.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StudentInfo {
    pub user_id: AccountId,
    pub email: String,
    pub role: Role,
    pub profile: Option<Profile>,
    pub classes: Vec<String>,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StudentQuery {
    pub user_id: AccountId,
}
