use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::utils::parse_float;

/// Item del carrito. La clave práctica es `(id_base, talle)`.
/// Campos extra que agregue la página se conservan y viajan a `/pagar`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CartItem {
    #[serde(default)]
    pub id_base: String,
    pub nombre: String,
    #[serde(deserialize_with = "precio_flexible")]
    pub precio: f64,
    #[serde(default)]
    pub talle: String,
    // El backend de pago lee `cantidad`; la página a veces no la manda
    #[serde(default = "cantidad_por_defecto", deserialize_with = "cantidad_minima")]
    pub cantidad: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn cantidad_por_defecto() -> u32 {
    1
}

/// `cantidad` nunca baja de 1 (Mercado Pago la usa como `quantity`)
fn cantidad_minima<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(u32::deserialize(deserializer)?.max(1))
}

/// Acepta `1500`, `1500.5` o `"1500"`
fn precio_flexible<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("precio fuera de rango")),
        Value::String(s) => parse_float(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("precio no numérico: {}", s))),
        other => Err(serde::de::Error::custom(format!("precio inválido: {}", other))),
    }
}

impl CartItem {
    pub fn new(id_base: &str, nombre: &str, precio: f64, talle: &str) -> Self {
        Self {
            id_base: id_base.to_string(),
            nombre: nombre.to_string(),
            precio,
            talle: talle.to_string(),
            cantidad: 1,
            extra: Map::new(),
        }
    }

    pub fn with_cantidad(mut self, cantidad: u32) -> Self {
        self.cantidad = cantidad.max(1);
        self
    }

    /// Misma clave `(id_base, talle)`
    pub fn matches(&self, id_base: &str, talle: &str) -> bool {
        self.id_base == id_base && self.talle == talle
    }

    pub fn subtotal(&self) -> f64 {
        self.precio * f64::from(self.cantidad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_page_item_with_defaults() {
        let item: CartItem = serde_json::from_value(json!({
            "id_base": "P1",
            "nombre": "Remera",
            "precio": 1500,
            "talle": "M"
        }))
        .unwrap();

        assert_eq!(item, CartItem::new("P1", "Remera", 1500.0, "M"));
        assert_eq!(item.cantidad, 1);
    }

    #[test]
    fn accepts_string_prices_and_keeps_extra_fields() {
        let item: CartItem = serde_json::from_value(json!({
            "nombre": "Buzo",
            "precio": "2300.50",
            "cantidad": 2,
            "imagen": "img/buzo.webp"
        }))
        .unwrap();

        assert_eq!(item.precio, 2300.5);
        assert_eq!(item.cantidad, 2);
        assert_eq!(item.id_base, "");
        assert_eq!(item.extra.get("imagen"), Some(&json!("img/buzo.webp")));

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["imagen"], json!("img/buzo.webp"));
        assert_eq!(back["cantidad"], json!(2));
    }

    #[test]
    fn rejects_non_numeric_price() {
        let result = serde_json::from_value::<CartItem>(json!({
            "nombre": "Gorra",
            "precio": "consultar"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn cantidad_is_at_least_one() {
        let item: CartItem = serde_json::from_value(json!({
            "id_base": "P1",
            "nombre": "Remera",
            "precio": 1500,
            "talle": "M",
            "cantidad": 0
        }))
        .unwrap();
        assert_eq!(item.cantidad, 1);

        let item = CartItem::new("P1", "Remera", 1500.0, "M").with_cantidad(0);
        assert_eq!(item.cantidad, 1);
    }

    #[test]
    fn subtotal_uses_cantidad() {
        let item = CartItem::new("P2", "Medias", 350.0, "U").with_cantidad(3);
        assert_eq!(item.subtotal(), 1050.0);
        assert!(item.matches("P2", "U"));
        assert!(!item.matches("P2", "M"));
    }
}
