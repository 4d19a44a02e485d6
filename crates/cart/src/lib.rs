//! `savora-cart` — the cart ledger and promo evaluation.
//!
//! The [`Cart`] aggregate owns the line items; [`totals`] derives the
//! price breakdown from them on every read; [`promo`] is the stateless
//! code-to-discount evaluator.

pub mod cart;
pub mod promo;
pub mod totals;

pub use cart::{
    AddItem, ApplyPromo, Cart, CartCommand, CartEvent, CartId, CartLine, Clear, RemoveItem,
    SetQuantity,
};
pub use promo::{PromoEffect, PromoError};
pub use totals::CartTotals;
