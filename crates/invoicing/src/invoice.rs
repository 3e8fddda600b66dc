use serde::{Deserialize, Serialize};

use protoinvoice_registry::{Prototype, PrototypeRegistry};

/// Invoice identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(pub u64);

impl InvoiceId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Invoice category: the closed set of prototype keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceCategory {
    Sales,
    Purchase,
    Service,
}

impl core::fmt::Display for InvoiceCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let tag = match self {
            InvoiceCategory::Sales => "sales",
            InvoiceCategory::Purchase => "purchase",
            InvoiceCategory::Service => "service",
        };
        f.write_str(tag)
    }
}

/// Value record: a categorized invoice used as a cloneable exemplar.
///
/// Fields are private and only reachable through accessors, so an instance is
/// immutable once constructed. Construction accepts any values; there is no
/// validation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    invoice_id: InvoiceId,
    customer_name: String,
    amount: f64,
    payment_method: String,
    category: InvoiceCategory,
}

impl Invoice {
    pub fn new(
        invoice_id: InvoiceId,
        customer_name: impl Into<String>,
        amount: f64,
        payment_method: impl Into<String>,
        category: InvoiceCategory,
    ) -> Self {
        Self {
            invoice_id,
            customer_name: customer_name.into(),
            amount,
            payment_method: payment_method.into(),
            category,
        }
    }

    pub fn invoice_id(&self) -> InvoiceId {
        self.invoice_id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }

    pub fn category(&self) -> InvoiceCategory {
        self.category
    }
}

impl Prototype for Invoice {
    type Key = InvoiceCategory;

    fn key(&self) -> InvoiceCategory {
        self.category
    }

    /// Explicit field-by-field copy: fresh `String` buffers, no sub-structure
    /// shared with the source.
    fn deep_clone(&self) -> Self {
        Self {
            invoice_id: self.invoice_id,
            customer_name: self.customer_name.clone(),
            amount: self.amount,
            payment_method: self.payment_method.clone(),
            category: self.category,
        }
    }
}

/// Category-keyed registry of invoice exemplars.
pub type InvoicePrototypeRegistry = PrototypeRegistry<Invoice>;
