use crate::domain::Product;
use crate::product_actor::CatalogError;

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

/// Per-session cart. Lines keep the order products were first added in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn add(&mut self, product: Product) -> Result<u32, CatalogError> {
        if !product.in_stock {
            return Err(CatalogError::OutOfStock(product.name));
        }
        if let Some(line) = self.lines.iter_mut().find(|line| line.product.id == product.id) {
            line.quantity += 1;
            return Ok(line.quantity);
        }
        self.lines.push(CartLine { product, quantity: 1 });
        Ok(1)
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn total(&self) -> f64 {
        self.lines
            .iter()
            .map(|line| line.product.price * f64::from(line.quantity))
            .sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
