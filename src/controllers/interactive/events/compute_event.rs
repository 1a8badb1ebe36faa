use std::time::Duration;

use crate::core::actions::compute_stripes::compute_stripes::StripeOutput;
use crate::core::data::iteration_field::IterationField;
use crate::core::data::stripe::Stripe;

#[derive(Debug, Clone, PartialEq)]
pub enum ComputeEventKind {
    Preview(IterationField),
    Progress(u8),
    StripeReady(Stripe),
    Finished { elapsed: Duration },
    Error { message: String },
}

impl ComputeEventKind {
    /// True for the events that end a generation.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished { .. } | Self::Error { .. })
    }
}

impl From<StripeOutput> for ComputeEventKind {
    fn from(output: StripeOutput) -> Self {
        match output {
            StripeOutput::Preview(field) => Self::Preview(field),
            StripeOutput::Progress(percent) => Self::Progress(percent),
            StripeOutput::Stripe(stripe) => Self::StripeReady(stripe),
        }
    }
}

/// Output of one generation, tagged with the generation that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputeEvent {
    pub generation: u64,
    pub kind: ComputeEventKind,
}
