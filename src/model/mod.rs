//! Data model: row types, validation hooks, and serialization views.

mod activity;
mod camper;
mod signup;
mod validation;
mod view;

pub use activity::{Activity, NewActivity};
pub use camper::{Camper, CamperInput, NewCamper};
pub use signup::{NewSignup, Signup, SignupInput};
pub use validation::{
    validate_camper_age, validate_camper_name, validate_signup_time, ValidationError, MAX_CAMPER_AGE,
    MAX_SIGNUP_HOUR, MIN_CAMPER_AGE, MIN_SIGNUP_HOUR,
};
pub use view::{ActivityDetail, CamperDetail, SignupDetail, SignupWithActivity, SignupWithCamper};
