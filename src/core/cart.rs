//! Cart aggregation business logic.
//!
//! The shop cart is client-side state that is consumed exactly once at
//! checkout. The backend order schema has single scalar product/quantity
//! fields, so a multi-line cart is deliberately serialized into ONE order:
//! names joined as `"A (x10), B (x5)"`, quantities summed into a string,
//! amounts summed into one total. No per-line sub-orders are ever created.
//!
//! Quantities are stepped in multiples of each product's minimum order
//! quantity and can never drop below it through adjustment; removing a line
//! is a separate explicit action.

use crate::{
    entities::readymade_product,
    errors::{Error, Result},
};

/// Fallback minimum order quantity when a product's unit description does
/// not start with a number.
const DEFAULT_MIN_ORDER: u32 = 50;

/// The product facts a cart line needs, detached from the database model.
#[derive(Debug, Clone, PartialEq)]
pub struct CartProduct {
    /// Readymade product id
    pub id: i64,
    /// Display name, used in the aggregated `product_name`
    pub name: String,
    /// Price per unit
    pub unit_price: f64,
    /// Minimum order quantity; also the add/adjust step size
    pub min_order: u32,
}

impl CartProduct {
    /// Builds a cart product from a shop listing. The minimum order quantity
    /// is the leading integer of the unit description (`"50 meters"` → 50),
    /// falling back to [`DEFAULT_MIN_ORDER`].
    #[must_use]
    pub fn from_listing(listing: &readymade_product::Model) -> Self {
        let min_order = listing
            .quantity
            .split_whitespace()
            .next()
            .and_then(|tok| tok.parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MIN_ORDER);

        Self {
            id: listing.id,
            name: listing.name.clone(),
            unit_price: f64::from(listing.price.unwrap_or(0)),
            min_order,
        }
    }
}

/// One line in the cart: a product and how many units of it.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// The product this line holds
    pub product: CartProduct,
    /// Always a positive multiple of `product.min_order`
    pub quantity: u32,
}

impl CartLine {
    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.product.unit_price * f64::from(self.quantity)
    }
}

/// Customer details collected by the checkout form. All four fields are
/// required before any order is submitted.
#[derive(Debug, Clone, Default)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// The single order submission a checkout produces.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_address: String,
    /// First cart line's product id, kept for reference
    pub readymade_product_id: Option<i64>,
    /// Aggregated names, `"A (x10), B (x5)"`
    pub product_name: String,
    /// Total quantity across all lines, as a string
    pub quantity: String,
    /// Always `"Multiple Items"` for cart checkouts
    pub quality: String,
    /// Sum of every line total
    pub amount: f64,
}

/// The shop cart. Built up by repeated adds, consumed once at checkout.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds a product to the cart. If the product is already present its
    /// quantity grows by the product's own minimum order quantity; otherwise
    /// a new line starts at that minimum. There is no upper bound.
    pub fn add(&mut self, product: CartProduct) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += line.product.min_order;
        } else {
            let quantity = product.min_order;
            self.lines.push(CartLine { product, quantity });
        }
    }

    /// Steps a line's quantity by `delta` units, clamped so it never drops
    /// below the product's minimum order quantity. The UI only ever passes
    /// ±`min_order`, making this a step function. Unknown ids are ignored.
    pub fn adjust_quantity(&mut self, product_id: i64, delta: i64) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            let proposed = i64::from(line.quantity) + delta;
            let floor = i64::from(line.product.min_order);
            // proposed >= floor >= 1 here, so the cast back is lossless
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                line.quantity = proposed.max(floor) as u32;
            }
        }
    }

    /// Removes a line entirely, regardless of its quantity.
    pub fn remove(&mut self, product_id: i64) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Sum of every line total.
    #[must_use]
    pub fn total_amount(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Consumes the cart into exactly one order draft.
    ///
    /// # Errors
    /// Returns a validation error if any of the four customer fields is
    /// empty or the cart holds no lines. Validation happens before any
    /// network or database work.
    pub fn checkout(self, customer: &CustomerInfo) -> Result<OrderDraft> {
        for (value, label) in [
            (&customer.name, "name"),
            (&customer.email, "email"),
            (&customer.phone, "phone"),
            (&customer.address, "address"),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Validation {
                    message: format!("Customer {label} is required"),
                });
            }
        }

        if self.lines.is_empty() {
            return Err(Error::Validation {
                message: "Cart is empty".to_string(),
            });
        }

        let product_name = self
            .lines
            .iter()
            .map(|l| format!("{} (x{})", l.product.name, l.quantity))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(OrderDraft {
            customer_name: customer.name.clone(),
            customer_email: customer.email.clone(),
            customer_phone: customer.phone.clone(),
            customer_address: customer.address.clone(),
            readymade_product_id: self.lines.first().map(|l| l.product.id),
            product_name,
            quantity: self.total_quantity().to_string(),
            quality: "Multiple Items".to_string(),
            amount: self.total_amount(),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    fn product(id: i64, name: &str, price: f64, min_order: u32) -> CartProduct {
        CartProduct {
            id,
            name: name.to_string(),
            unit_price: price,
            min_order,
        }
    }

    fn customer() -> CustomerInfo {
        CustomerInfo {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            address: "14 Mill Road".to_string(),
        }
    }

    #[test]
    fn test_add_new_line_starts_at_min_order() {
        let mut cart = Cart::new();
        cart.add(product(1, "A", 100.0, 10));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 10);
    }

    #[test]
    fn test_repeated_add_steps_by_min_order() {
        let mut cart = Cart::new();
        let p = product(1, "A", 100.0, 10);
        cart.add(p.clone());
        cart.add(p.clone());
        cart.add(p);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 30);
    }

    #[test]
    fn test_adjust_quantity_clamps_at_min_order() {
        let mut cart = Cart::new();
        cart.add(product(1, "A", 100.0, 10));

        cart.adjust_quantity(1, -10);
        assert_eq!(cart.lines()[0].quantity, 10, "cannot go below min order");

        cart.adjust_quantity(1, 10);
        assert_eq!(cart.lines()[0].quantity, 20);

        cart.adjust_quantity(1, -10);
        assert_eq!(cart.lines()[0].quantity, 10);
    }

    #[test]
    fn test_adjust_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(product(1, "A", 100.0, 10));
        cart.adjust_quantity(99, 10);
        assert_eq!(cart.lines()[0].quantity, 10);
    }

    #[test]
    fn test_remove_deletes_line_regardless_of_quantity() {
        let mut cart = Cart::new();
        cart.add(product(1, "A", 100.0, 10));
        cart.add(product(2, "B", 50.0, 5));

        cart.remove(1);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].product.id, 2);
    }

    #[test]
    fn test_checkout_aggregation_contract() {
        // The exact scenario the aggregation contract is defined by:
        // [{id:1, price:100, minOrder:10, qty:10}, {id:2, price:50, minOrder:5, qty:5}]
        let mut cart = Cart::new();
        cart.add(product(1, "A", 100.0, 10));
        cart.add(product(2, "B", 50.0, 5));

        let draft = cart.checkout(&customer()).unwrap();
        assert_eq!(draft.amount, 1250.0);
        assert_eq!(draft.quantity, "15");
        assert_eq!(draft.product_name, "A (x10), B (x5)");
        assert_eq!(draft.quality, "Multiple Items");
        assert_eq!(draft.readymade_product_id, Some(1));
    }

    #[test]
    fn test_checkout_amount_is_sum_of_line_totals() {
        let mut cart = Cart::new();
        let a = product(1, "A", 100.0, 10);
        let b = product(2, "B", 50.0, 5);
        cart.add(a.clone());
        cart.add(a); // 20 units of A
        cart.add(b); // 5 units of B

        assert_eq!(cart.total_amount(), 2250.0);
        assert_eq!(cart.total_quantity(), 25);

        let draft = cart.checkout(&customer()).unwrap();
        assert_eq!(draft.amount, 2250.0);
        assert_eq!(draft.quantity, "25");
    }

    #[test]
    fn test_checkout_requires_all_customer_fields() {
        let mut cart = Cart::new();
        cart.add(product(1, "A", 100.0, 10));

        let mut info = customer();
        info.phone = "   ".to_string();
        let result = cart.checkout(&info);
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_checkout_rejects_empty_cart() {
        let cart = Cart::new();
        let result = cart.checkout(&customer());
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_min_order_parsed_from_listing_quantity() {
        let listing = readymade_product::Model {
            id: 7,
            name: "Canvas Roll".to_string(),
            quantity: "25 meters".to_string(),
            quality: "Standard".to_string(),
            price: Some(300),
        };
        let p = CartProduct::from_listing(&listing);
        assert_eq!(p.min_order, 25);
        assert_eq!(p.unit_price, 300.0);
    }

    #[test]
    fn test_min_order_falls_back_when_unparseable() {
        let listing = readymade_product::Model {
            id: 8,
            name: "Remnant Bag".to_string(),
            quantity: "assorted".to_string(),
            quality: "Standard".to_string(),
            price: None,
        };
        let p = CartProduct::from_listing(&listing);
        assert_eq!(p.min_order, DEFAULT_MIN_ORDER);
        assert_eq!(p.unit_price, 0.0);
    }
}
