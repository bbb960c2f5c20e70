// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The ledger store: the only mutation surface of a ledger.
//!
//! Every mutation applies a command to the current ledger, persists the
//! full resulting snapshot, and only then replaces the in-memory ledger.
//! A mutation whose save fails leaves the store exactly as it was.

use dh_payroll::{
    Command, Ledger, TransitionResult, apply, coach_lines, export_rows, month_totals,
    year_totals,
};
use dh_payroll_audit::{Actor, AuditEvent, Cause};
use dh_payroll_domain::{
    CoachId, DomainError, IdentityFailure, LedgerYear, MonthIndex, NationalId, RosterKey,
    Withholding, compute_withholding, parse_amount, validate_coach_name, validate_national_id,
};
use dh_payroll_persistence::{
    AuditJournal, AuditRecord, BlobStore, DecodedLedger, decode_ledger, encode_ledger,
    save_with_retry,
};
use time::OffsetDateTime;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use crate::config::StoreConfig;
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::export::{ExportOutcome, build_export};
use crate::live::{LedgerEvent, LedgerEventBroadcaster};
use crate::request_response::{
    ApiResult, CoachLineView, CoachView, HistoryEntry, MonthSummary, MonthTotalsView,
    MutationResponse, RegisterCoachRequest, RegisterCoachResponse, SetAmountResponse,
    YearSummary,
};

/// A session-scoped owner of one ledger.
///
/// Methods that mutate take `&mut self`, so mutations on one store are
/// serialized by the borrow checker.
pub struct LedgerStore<S> {
    backend: S,
    config: StoreConfig,
    ledger: Ledger,
    selected_year: LedgerYear,
    events: LedgerEventBroadcaster,
}

impl<S: BlobStore + AuditJournal> LedgerStore<S> {
    /// Opens the ledger stored under the configured key.
    ///
    /// A missing blob yields an empty ledger. A stored blob is validated and
    /// repaired. The selected year's payment table is created in memory if
    /// missing; it is persisted with the next mutation.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::PersistenceFailed` if the blob cannot be read or
    /// is not a valid ledger.
    pub fn open(
        mut backend: S,
        config: StoreConfig,
        selected_year: LedgerYear,
    ) -> Result<Self, ApiError> {
        let stored: Option<String> = backend
            .load(&config.ledger_key)
            .map_err(translate_persistence_error)?;

        let mut ledger: Ledger = match stored {
            Some(blob) => {
                let decoded: DecodedLedger =
                    decode_ledger(&blob).map_err(translate_persistence_error)?;
                if !decoded.repairs.is_empty() {
                    warn!(
                        ledger_key = %config.ledger_key,
                        repairs = decoded.repairs.len(),
                        "Stored ledger needed repairs"
                    );
                }
                decoded.ledger
            }
            None => {
                info!(ledger_key = %config.ledger_key, "No stored ledger, starting empty");
                Ledger::new()
            }
        };
        ledger.payments.entry(selected_year).or_default();

        info!(
            ledger_key = %config.ledger_key,
            coaches = ledger.coaches.len(),
            year = %selected_year,
            "Opened ledger"
        );

        let events: LedgerEventBroadcaster = LedgerEventBroadcaster::new(config.event_buffer);
        Ok(Self {
            backend,
            config,
            ledger,
            selected_year,
            events,
        })
    }

    /// Returns the current ledger.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns the year new registrations are enrolled in.
    #[must_use]
    pub const fn selected_year(&self) -> LedgerYear {
        self.selected_year
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Closes the store and hands back its backend.
    #[must_use]
    pub fn into_backend(self) -> S {
        self.backend
    }

    /// Subscribes to saved-ledger events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<LedgerEvent> {
        self.events.subscribe()
    }

    /// Registers a coach and enrolls it in every month of the selected year.
    ///
    /// An identity number that fails the checksum is rejected with
    /// `ApiError::IdentityWarning` unless the request allows it.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank, the identity number needs an
    /// override, the identity number is already registered, the coach limit
    /// is reached, or the ledger cannot be saved.
    pub fn register_coach(
        &mut self,
        request: &RegisterCoachRequest,
        actor: Actor,
        cause: Cause,
    ) -> Result<ApiResult<RegisterCoachResponse>, ApiError> {
        let name: String = validate_coach_name(&request.name).map_err(translate_domain_error)?;
        let national_id: NationalId = NationalId::new(&request.national_id);

        let identity_failure: Option<IdentityFailure> = if national_id.is_empty() {
            None
        } else {
            validate_national_id(national_id.value()).err()
        };
        if let Some(reason) = identity_failure {
            if !request.allow_invalid_identity {
                return Err(translate_domain_error(DomainError::InvalidNationalId {
                    national_id: national_id.value().to_string(),
                    reason,
                }));
            }
            warn!(%reason, "Registering coach despite identity number warning");
        }

        let coach_id: CoachId = self.generate_coach_id();
        let year: LedgerYear = self.selected_year;
        let command: Command = Command::RegisterCoach {
            coach_id: coach_id.clone(),
            name: name.clone(),
            national_id: national_id.clone(),
            year,
        };
        let audit_event: AuditEvent = self.commit(command, actor, cause)?;

        Ok(ApiResult {
            response: RegisterCoachResponse {
                coach_id: coach_id.value().to_string(),
                name: name.clone(),
                national_id: national_id.value().to_string(),
                year: year.year(),
                overridden_identity_warning: identity_failure.map(|reason| reason.to_string()),
                message: format!("Registered {name} for all months of {year}"),
            },
            audit_event,
        })
    }

    /// Deletes a coach with all payments and roster entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the coach does not exist or the ledger cannot be saved.
    pub fn delete_coach(
        &mut self,
        coach_id: &CoachId,
        actor: Actor,
        cause: Cause,
    ) -> Result<ApiResult<MutationResponse>, ApiError> {
        let command: Command = Command::DeleteCoach {
            coach_id: coach_id.clone(),
        };
        let audit_event: AuditEvent = self.commit(command, actor, cause)?;

        Ok(ApiResult {
            response: MutationResponse {
                message: format!("Deleted coach {coach_id}"),
            },
            audit_event,
        })
    }

    /// Replaces a coach's identity number.
    ///
    /// The checksum is not enforced and uniqueness is not re-checked.
    ///
    /// # Errors
    ///
    /// Returns an error if the coach does not exist or the ledger cannot be saved.
    pub fn update_identity(
        &mut self,
        coach_id: &CoachId,
        raw_national_id: &str,
        actor: Actor,
        cause: Cause,
    ) -> Result<ApiResult<MutationResponse>, ApiError> {
        let command: Command = Command::UpdateIdentity {
            coach_id: coach_id.clone(),
            national_id: NationalId::new(raw_national_id),
        };
        let audit_event: AuditEvent = self.commit(command, actor, cause)?;

        Ok(ApiResult {
            response: MutationResponse {
                message: format!("Updated identity number of coach {coach_id}"),
            },
            audit_event,
        })
    }

    /// Adds a coach to a month's roster. Adding a member again changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the coach does not exist or the ledger cannot be saved.
    pub fn add_to_roster(
        &mut self,
        key: RosterKey,
        coach_id: &CoachId,
        actor: Actor,
        cause: Cause,
    ) -> Result<ApiResult<MutationResponse>, ApiError> {
        let command: Command = Command::AddToRoster {
            key,
            coach_id: coach_id.clone(),
        };
        let audit_event: AuditEvent = self.commit(command, actor, cause)?;

        Ok(ApiResult {
            response: MutationResponse {
                message: format!("Coach {coach_id} is on the roster of {}", key.period_label()),
            },
            audit_event,
        })
    }

    /// Removes a coach from a month's roster, keeping the stored amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the coach does not exist or the ledger cannot be saved.
    pub fn remove_from_roster(
        &mut self,
        key: RosterKey,
        coach_id: &CoachId,
        actor: Actor,
        cause: Cause,
    ) -> Result<ApiResult<MutationResponse>, ApiError> {
        let command: Command = Command::RemoveFromRoster {
            key,
            coach_id: coach_id.clone(),
        };
        let audit_event: AuditEvent = self.commit(command, actor, cause)?;

        Ok(ApiResult {
            response: MutationResponse {
                message: format!(
                    "Coach {coach_id} is off the roster of {}",
                    key.period_label()
                ),
            },
            audit_event,
        })
    }

    /// Stores a coach's gross amount for a month.
    ///
    /// The raw input is normalized first: separators and symbols are
    /// dropped, and negative or unparseable input becomes 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the coach does not exist or the ledger cannot be saved.
    pub fn set_monthly_amount(
        &mut self,
        key: RosterKey,
        coach_id: &CoachId,
        raw_amount: &str,
        actor: Actor,
        cause: Cause,
    ) -> Result<ApiResult<SetAmountResponse>, ApiError> {
        let amount: u64 = parse_amount(raw_amount);
        let command: Command = Command::SetMonthlyAmount {
            key,
            coach_id: coach_id.clone(),
            amount,
        };
        let audit_event: AuditEvent = self.commit(command, actor, cause)?;

        let withholding: Withholding = compute_withholding(amount);
        Ok(ApiResult {
            response: SetAmountResponse {
                coach_id: coach_id.value().to_string(),
                period: key.period_label(),
                amount,
                tax: withholding.tax,
                net: withholding.net,
                message: format!("Stored {amount} for coach {coach_id} in {}", key.period_label()),
            },
            audit_event,
        })
    }

    /// Makes `year` the year new registrations are enrolled in.
    ///
    /// A year without data gets an empty payment table.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger cannot be saved; the selection is
    /// unchanged in that case.
    pub fn select_year(
        &mut self,
        year: LedgerYear,
        actor: Actor,
        cause: Cause,
    ) -> Result<ApiResult<MutationResponse>, ApiError> {
        let audit_event: AuditEvent = self.commit(Command::SelectYear { year }, actor, cause)?;
        self.selected_year = year;

        Ok(ApiResult {
            response: MutationResponse {
                message: format!("Selected year {year}"),
            },
            audit_event,
        })
    }

    /// Lists all coaches in registration order.
    #[must_use]
    pub fn coaches(&self) -> Vec<CoachView> {
        self.ledger.coaches.iter().map(CoachView::from).collect()
    }

    /// Lists the coaches that could be added to a month's roster.
    #[must_use]
    pub fn roster_candidates(&self, key: &RosterKey) -> Vec<CoachView> {
        self.ledger
            .roster_candidates(key)
            .into_iter()
            .map(CoachView::from)
            .collect()
    }

    /// Returns the sorted years with data, always including the selected year.
    #[must_use]
    pub fn available_years(&self) -> Vec<LedgerYear> {
        self.ledger.available_years(self.selected_year)
    }

    /// Builds the monthly view.
    #[must_use]
    pub fn month_summary(&self, key: &RosterKey) -> MonthSummary {
        MonthSummary {
            year: key.year.year(),
            month_index: key.month.index(),
            period: key.period_label(),
            lines: coach_lines(&self.ledger, key)
                .into_iter()
                .map(CoachLineView::from)
                .collect(),
            totals: month_totals(&self.ledger, key).into(),
        }
    }

    /// Builds the annual view.
    #[must_use]
    pub fn year_summary(&self, year: LedgerYear) -> YearSummary {
        YearSummary {
            year: year.year(),
            months: MonthIndex::all()
                .map(|month| {
                    let key: RosterKey = RosterKey::new(year, month);
                    MonthTotalsView {
                        period: key.period_label(),
                        totals: month_totals(&self.ledger, &key).into(),
                    }
                })
                .collect(),
            totals: year_totals(&self.ledger, year).into(),
        }
    }

    /// Builds the export batch of a year.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Internal` if the CSV document cannot be rendered.
    pub fn export_year(
        &self,
        year: LedgerYear,
        now: OffsetDateTime,
    ) -> Result<ExportOutcome, ApiError> {
        let outcome: ExportOutcome = build_export(year, export_rows(&self.ledger, year), now)?;
        match &outcome {
            ExportOutcome::Ready(batch) => {
                info!(year = %year, rows = batch.rows.len(), file = %batch.file_name, "Built export batch");
            }
            ExportOutcome::NothingToExport { .. } => {
                info!(year = %year, "Nothing to export");
            }
        }
        Ok(outcome)
    }

    /// Returns the most recent journal entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::PersistenceFailed` if the journal cannot be read.
    pub fn history(&mut self, limit: usize) -> Result<Vec<HistoryEntry>, ApiError> {
        let records: Vec<AuditRecord> = self
            .backend
            .history(&self.config.ledger_key, limit)
            .map_err(translate_persistence_error)?;
        Ok(records.into_iter().map(HistoryEntry::from).collect())
    }

    /// Applies, persists, journals and announces one command.
    fn commit(
        &mut self,
        command: Command,
        actor: Actor,
        cause: Cause,
    ) -> Result<AuditEvent, ApiError> {
        let action: &'static str = command.name();
        let TransitionResult {
            new_ledger,
            audit_event,
        } = apply(&self.ledger, command, actor, cause).map_err(translate_core_error)?;

        let blob: String = encode_ledger(&new_ledger).map_err(translate_persistence_error)?;
        let attempts: u32 = save_with_retry(
            &mut self.backend,
            &self.config.ledger_key,
            &blob,
            &self.config.retry,
        )
        .map_err(translate_persistence_error)?;

        self.ledger = new_ledger;
        if audit_event.is_noop() {
            debug!(action, "Mutation left the ledger unchanged");
        }

        // The snapshot is already durable; a journal failure must not undo it.
        if let Err(err) = self.backend.append(&self.config.ledger_key, &audit_event) {
            error!(action, error = %err, "Failed to journal audit event");
        }

        info!(ledger_key = %self.config.ledger_key, action, attempts, "Ledger saved");
        self.events.broadcast(&LedgerEvent::Saved {
            ledger_key: self.config.ledger_key.clone(),
            action: action.to_string(),
            attempts,
        });

        Ok(audit_event)
    }

    fn generate_coach_id(&self) -> CoachId {
        loop {
            let millis: i128 = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
            let candidate: CoachId =
                CoachId::new(&format!("c_{millis}_{:08x}", rand::random::<u32>()));
            if self.ledger.coach(&candidate).is_none() {
                return candidate;
            }
        }
    }
}
