use std::fmt::Display;

pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Proof of one issued fetch. Not `Clone`: a ticket settles its fetch once.
#[derive(Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Hands out tickets; only the most recent one may write results back.
#[derive(Clone, Debug, Default)]
pub struct Generations {
    latest: u64,
}

impl Generations {
    pub fn issue(&mut self) -> FetchTicket {
        self.latest += 1;
        FetchTicket {
            generation: self.latest,
        }
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }
}

/// User-facing text for a failed call.
pub fn failure_message(err: &impl Display) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        FALLBACK_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}
