// Textos que ve el usuario (alerts y prompt)

pub const PRECIO_INVALIDO: &str = "❌ El precio ingresado no es válido";
pub const PRECIO_ERROR_SERVIDOR: &str = "❌ No se pudo actualizar el precio en el servidor";
pub const PRECIO_ERROR_RED: &str = "❌ Error de conexión al guardar el precio";

pub const TALLES_PROMPT: &str = "Modificar talles (separados por coma):";
pub const TALLES_ERROR_SERVIDOR: &str = "❌ No se pudo actualizar los talles";
pub const TALLES_ERROR_RED: &str = "❌ Error de conexión al guardar los talles";

pub const FIRESTORE_ERROR_SERVIDOR: &str = "❌ No se pudo actualizar Firestore";
pub const FIRESTORE_ERROR_RED: &str = "❌ Error de conexión al guardar los datos";

pub const LOGIN_OK: &str = "✅ Acceso concedido";
pub const LOGIN_ERROR: &str = "❌ Error al intentar login";

pub const PAGO_ERROR: &str = "Error al generar pago";
