//! Multi-step RFQ wizard for the contact page

use super::{RfqForm, RfqSubmission};
use crate::validation::{validate_form, validate_required, FieldErrors};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    Requirements,
    Volume,
    Contact,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Requirements,
        WizardStep::Volume,
        WizardStep::Contact,
        WizardStep::Review,
    ];

    /// Zero-based position, for progress indicators
    pub fn index(&self) -> usize {
        match self {
            WizardStep::Requirements => 0,
            WizardStep::Volume => 1,
            WizardStep::Contact => 2,
            WizardStep::Review => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Requirements => "Requirements",
            WizardStep::Volume => "Volume",
            WizardStep::Contact => "Contact",
            WizardStep::Review => "Review",
        }
    }

    fn next(self) -> Self {
        match self {
            WizardStep::Requirements => WizardStep::Volume,
            WizardStep::Volume => WizardStep::Contact,
            WizardStep::Contact | WizardStep::Review => WizardStep::Review,
        }
    }

    fn previous(self) -> Self {
        match self {
            WizardStep::Requirements | WizardStep::Volume => WizardStep::Requirements,
            WizardStep::Contact => WizardStep::Volume,
            WizardStep::Review => WizardStep::Contact,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("Please choose a product")]
    MissingProduct,

    #[error("Please enter a quantity greater than zero")]
    InvalidQuantity,

    #[error("{}", .0.first_message().unwrap_or("Please check your contact details"))]
    Contact(FieldErrors),

    #[error("Review the request before sending")]
    NotReviewed,
}

/// Wizard input collected across steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardData {
    pub product: String,
    pub quantity: String,
    pub notes: String,
    pub contact: RfqForm,
}

#[derive(Debug, Clone)]
pub struct RfqWizard {
    step: WizardStep,
    pub data: WizardData,
}

impl RfqWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Requirements,
            data: WizardData::default(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Validate the current step and move forward
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        match self.step {
            WizardStep::Requirements => {
                if !validate_required(&self.data.product) {
                    return Err(WizardError::MissingProduct);
                }
            }
            WizardStep::Volume => {
                self.quantity()?;
            }
            WizardStep::Contact => {
                validate_form(&self.data.contact, "").map_err(WizardError::Contact)?;
            }
            WizardStep::Review => {}
        }
        self.step = self.step.next();
        Ok(self.step)
    }

    pub fn back(&mut self) -> WizardStep {
        self.step = self.step.previous();
        self.step
    }

    /// Build the submission once every step has been reviewed
    pub fn finish(&self, source: &str) -> Result<RfqSubmission, WizardError> {
        if self.step != WizardStep::Review {
            return Err(WizardError::NotReviewed);
        }

        let quantity = self.quantity()?;
        let mut message = format!("Product: {}\nQuantity: {}", self.data.product.trim(), quantity);
        let notes = self.data.notes.trim();
        if !notes.is_empty() {
            message.push('\n');
            message.push_str(notes);
        }

        let form = RfqForm {
            message,
            ..self.data.contact.clone()
        };
        validate_form(&form, source).map_err(WizardError::Contact)
    }

    fn quantity(&self) -> Result<u32, WizardError> {
        match self.data.quantity.trim().parse::<u32>() {
            Ok(q) if q > 0 => Ok(q),
            _ => Err(WizardError::InvalidQuantity),
        }
    }
}

impl Default for RfqWizard {
    fn default() -> Self {
        Self::new()
    }
}
