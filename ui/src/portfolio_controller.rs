//! View state for the portfolio dashboard.
//!
//! The controller is a small state machine, `Unmounted -> Idle -> Fetching -> Idle`,
//! driven by mount and identity-change events. It never performs I/O itself:
//! starting a refresh hands out a [`FetchTicket`], the caller runs the fetch,
//! and the result comes back through [`PortfolioController::complete`].
//! Tickets fence out stale results, so a slow response for an old address can
//! never overwrite the state of the current one.

use api::portfolio::PortfolioFetcher;
use api::portfolio::PortfolioSnapshot;
use api::ApiError;
use dioxus_logger::tracing;
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use crate::identity::Identity;

/// The only error text users ever see. Error kinds are distinguished in logs.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch portfolio data";

/// Identifies one refresh attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    address: String,
}

impl FetchTicket {
    /// The address this fetch was issued for.
    pub fn address(&self) -> &str {
        &self.address
    }
}

#[derive(Debug, Clone, PartialEq, Eq, strum::EnumIs)]
enum Phase {
    Unmounted,
    Idle,
    Fetching(FetchTicket),
}

/// Outcome of handing a fetch result back to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIs)]
pub enum Completion {
    /// The result belonged to the current fetch and was applied.
    Applied,
    /// The fetch had been superseded; the result was dropped.
    Stale,
}

#[derive(Debug)]
pub struct PortfolioController {
    phase: Phase,
    identity: Identity,
    snapshot: PortfolioSnapshot,
    error: Option<String>,
    next_seq: u64,
}

impl Default for PortfolioController {
    fn default() -> Self {
        Self::new()
    }
}

impl PortfolioController {
    pub fn new() -> Self {
        Self {
            phase: Phase::Unmounted,
            identity: Identity::default(),
            snapshot: PortfolioSnapshot::default(),
            error: None,
            next_seq: 0,
        }
    }

    pub fn is_mounted(&self) -> bool {
        !self.phase.is_unmounted()
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_fetching()
    }

    pub fn snapshot(&self) -> &PortfolioSnapshot {
        &self.snapshot
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// First activation. Starts the initial refresh if an address is already
    /// connected. Calling it again does nothing.
    pub fn mount(&mut self) -> Option<FetchTicket> {
        if self.is_mounted() {
            return None;
        }
        self.phase = Phase::Idle;
        if self.identity.address().is_none() {
            return None;
        }
        self.begin_refresh()
    }

    /// Records the latest identity.
    ///
    /// A change of address drops any in-flight fetch and resets the snapshot,
    /// then, once mounted, starts exactly one refresh for the new address.
    /// A change of network label alone does not refetch.
    pub fn set_identity(&mut self, identity: Identity) -> Option<FetchTicket> {
        let address_changed = self.identity.address() != identity.address();
        self.identity = identity;
        if !address_changed {
            return None;
        }

        if let Phase::Fetching(ticket) = &self.phase {
            tracing::debug!(
                "address changed, abandoning fetch #{} for {}",
                ticket.seq,
                ticket.address
            );
            self.phase = Phase::Idle;
        }
        self.snapshot = PortfolioSnapshot::default();
        self.error = None;

        if self.is_mounted() && self.identity.address().is_some() {
            self.begin_refresh()
        } else {
            None
        }
    }

    /// Starts a refresh for the current address.
    ///
    /// Without an address this only logs. Otherwise the controller enters the
    /// loading state, clears the error, and supersedes any fetch in flight.
    pub fn begin_refresh(&mut self) -> Option<FetchTicket> {
        let Some(address) = self.identity.address() else {
            tracing::warn!("Invalid wallet account: {:?}", self.identity);
            return None;
        };
        if !self.is_mounted() {
            tracing::debug!("refresh requested before mount, ignoring");
            return None;
        }

        let ticket = FetchTicket {
            seq: self.next_seq,
            address: address.to_string(),
        };
        self.next_seq += 1;

        if let Phase::Fetching(previous) = &self.phase {
            tracing::debug!("fetch #{} supersedes #{}", ticket.seq, previous.seq);
        }
        self.phase = Phase::Fetching(ticket.clone());
        self.error = None;
        Some(ticket)
    }

    /// The manual refresh control. Disabled while a fetch is running.
    pub fn request_refresh(&mut self) -> Option<FetchTicket> {
        if self.is_loading() {
            return None;
        }
        self.begin_refresh()
    }

    /// Hands back the result of the fetch identified by `ticket`.
    ///
    /// Success replaces the snapshot whole. Failure keeps the snapshot and
    /// stores the generic error message. Either way loading ends.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<PortfolioSnapshot, ApiError>,
    ) -> Completion {
        match &self.phase {
            Phase::Fetching(current) if *current == ticket => {}
            _ => {
                tracing::debug!(
                    "discarding stale result of fetch #{} for {}",
                    ticket.seq,
                    ticket.address
                );
                return Completion::Stale;
            }
        }

        match result {
            Ok(snapshot) => self.snapshot = snapshot,
            Err(e) => {
                tracing::error!("fetch portfolio data error for {}: {}", ticket.address, e);
                self.error = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }
        self.phase = Phase::Idle;
        Completion::Applied
    }

    /// Runs one refresh to completion against `fetcher`.
    ///
    /// Returns `None` when no refresh was started.
    pub async fn refresh<F: PortfolioFetcher>(&mut self, fetcher: &F) -> Option<Completion> {
        let ticket = self.begin_refresh()?;
        let result = fetcher.fetch_portfolio(ticket.address()).await;
        Some(self.complete(ticket, result))
    }

    /// What to draw for the current state. Has no side effects.
    pub fn render(&self) -> PortfolioView {
        if !self.is_mounted() {
            return PortfolioView::Empty;
        }
        if self.identity.address().is_none() && !self.is_loading() {
            return PortfolioView::ConnectPrompt;
        }

        let balance = if self.is_loading() {
            BalancePanel::Loading
        } else {
            BalancePanel::Loaded {
                native_balance: self.snapshot.native_balance.normalize().to_string(),
                network_label: self.identity.network_label().to_string(),
            }
        };

        let tokens = self
            .snapshot
            .tokens
            .iter()
            .map(|t| TokenRow {
                symbol: t.symbol().unwrap_or("Unknown Token").to_string(),
                mint_address: t.mint_address().to_string(),
                amount: t.amount().to_string(),
            })
            .collect();

        PortfolioView::Dashboard(DashboardView {
            balance,
            tokens,
            total_value_usd: format_usd(self.snapshot.total_value_usd),
            refresh_enabled: !self.is_loading(),
            error: self.error.clone(),
        })
    }
}

/// Two decimal places, half away from zero, e.g. `12.50`.
fn format_usd(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortfolioView {
    /// Not mounted yet: draw nothing.
    Empty,
    /// No wallet connected.
    ConnectPrompt,
    Dashboard(DashboardView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub balance: BalancePanel,
    /// empty means "no tokens found".
    pub tokens: Vec<TokenRow>,
    pub total_value_usd: String,
    pub refresh_enabled: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalancePanel {
    Loading,
    Loaded {
        native_balance: String,
        network_label: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRow {
    pub symbol: String,
    pub mint_address: String,
    pub amount: String,
}
