//! Fixed strings and timings of the registration flow.

use std::time::Duration;

/// Hosted table receiving one row per submission.
pub const REGISTRATION_TABLE: &str = "cp3pro";

/// Route the shell opens once a purchase is registered.
pub const LOGIN_ROUTE: &str = "/login";

/// Route of the registration form itself.
pub const REGISTER_ROUTE: &str = "/";

/// Delay between the success banner and the redirect.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// Minimum number of characters accepted in the phone field.
///
/// Counted in Unicode scalar values, so an emoji counts once (not as two UTF-16 units).
pub const MIN_PHONE_LENGTH: usize = 10;

pub const SUCCESS_MESSAGE: &str =
    "¡Compra exitosa! Haremos llegar la cámara a la puerta de tu casa.";
pub const MISSING_FIELD_MESSAGE: &str = "Por favor, completa todos los campos.";
pub const PHONE_TOO_SHORT_MESSAGE: &str = "El teléfono debe tener al menos 10 caracteres.";
pub const PERSISTENCE_MESSAGE_PREFIX: &str = "Error al guardar los datos";
pub const UNEXPECTED_MESSAGE: &str = "Ha ocurrido un error, por favor intenta nuevamente.";
