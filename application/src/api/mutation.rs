//! GraphQL [`Mutation`]s definitions.

use std::collections::BTreeSet;

use common::{Date, Money, TimeOfDay};
use juniper::graphql_object;
use service::{command, domain, Command as _};

use crate::{api, define_error, AsError, Context, Error};

/// Root of all GraphQL mutations.
#[derive(Clone, Copy, Debug)]
pub struct Mutation;

impl Mutation {
    /// Name of the [`tracing::Span`] for the mutations.
    const SPAN_NAME: &'static str = "GraphQL mutation";
}

#[graphql_object(context = Context)]
impl Mutation {
    /// Creates a new active `Employer`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_INPUT` - `employeeCount` is negative;
    /// - `EMAIL_OCCUPIED` - provided `Email` is used by another `Employer`.
    #[tracing::instrument(
        skip_all,
        fields(
            company_name = %company_name,
            email = %email,
            gql.name = "createEmployer",
            name = %name,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    #[expect(clippy::too_many_arguments, reason = "still readable")]
    pub async fn create_employer(
        name: api::contact::Name,
        email: api::contact::Email,
        company_name: api::employer::CompanyName,
        phone: Option<api::contact::Phone>,
        address: Option<api::contact::Address>,
        industry: Option<api::employer::Industry>,
        employee_count: Option<i32>,
        ctx: &Context,
    ) -> Result<api::Employer, Error> {
        let employee_count = employee_count
            .map(api::non_negative)
            .transpose()
            .map_err(Error::from)
            .map_err(ctx.error())?;

        ctx.service()
            .execute(command::CreateEmployer {
                name: name.into(),
                email: email.into(),
                phone: phone.map(Into::into),
                address: address.map(Into::into),
                company_name: company_name.into(),
                industry: industry.map(Into::into),
                employee_count,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the provided details of the specified `Employer`.
    ///
    /// Omitted arguments are left untouched.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_INPUT` - `employeeCount` is negative;
    /// - `EMPLOYER_NOT_EXISTS` - the `Employer` with the specified ID does
    ///                           not exist;
    /// - `EMAIL_OCCUPIED` - provided `Email` is used by another `Employer`.
    #[tracing::instrument(
        skip_all,
        fields(
            employer_id = %employer_id,
            gql.name = "updateEmployer",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    #[expect(clippy::too_many_arguments, reason = "still readable")]
    pub async fn update_employer(
        employer_id: api::employer::Id,
        name: Option<api::contact::Name>,
        email: Option<api::contact::Email>,
        company_name: Option<api::employer::CompanyName>,
        phone: Option<api::contact::Phone>,
        address: Option<api::contact::Address>,
        industry: Option<api::employer::Industry>,
        employee_count: Option<i32>,
        ctx: &Context,
    ) -> Result<api::Employer, Error> {
        let employee_count = employee_count
            .map(api::non_negative)
            .transpose()
            .map_err(Error::from)
            .map_err(ctx.error())?;

        ctx.service()
            .execute(command::UpdateEmployer {
                employer_id: employer_id.into(),
                name: name.map(Into::into),
                email: email.map(Into::into),
                phone: phone.map(Into::into),
                address: address.map(Into::into),
                company_name: company_name.map(Into::into),
                industry: industry.map(Into::into),
                employee_count,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Deactivates the specified `Employer`.
    ///
    /// Deactivating an inactive `Employer` is a no-op.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `EMPLOYER_NOT_EXISTS` - the `Employer` with the specified ID does
    ///                           not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            employer_id = %employer_id,
            gql.name = "deactivateEmployer",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn deactivate_employer(
        employer_id: api::employer::Id,
        ctx: &Context,
    ) -> Result<api::Employer, Error> {
        ctx.service()
            .execute(command::DeactivateEmployer {
                employer_id: employer_id.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Creates a new `Employee`.
    ///
    /// The default Monday to Friday `09:00`-`17:00` UTC `Schedule` is used
    /// if no `schedule` is provided.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_INPUT` - `contract` or `schedule` is malformed;
    /// - `EMPLOYER_NOT_EXISTS` - the `Employer` with the specified ID does
    ///                           not exist;
    /// - `EMAIL_OCCUPIED` - provided `Email` is used by another `Employee`;
    /// - `TOO_MANY_PROJECTS` - more `projects` than the `role` allows;
    /// - `INVALID_HOURLY_RATE` - `hourlyRate` is missing for a part-time
    ///                           `Employee` or is not positive.
    #[tracing::instrument(
        skip_all,
        fields(
            email = %email,
            employer_id = ?employer_id.map(|id| id.to_string()),
            employment_type = ?employment_type,
            gql.name = "createEmployee",
            name = %name,
            otel.name = Self::SPAN_NAME,
            role = ?role,
        ),
    )]
    #[expect(clippy::too_many_arguments, reason = "still readable")]
    pub async fn create_employee(
        name: api::contact::Name,
        email: api::contact::Email,
        role: api::employee::Role,
        employment_type: api::employee::EmploymentType,
        contract: api::employee::ContractInput,
        projects: Option<Vec<api::employee::ProjectCode>>,
        employer_id: Option<api::employer::Id>,
        bank_account: Option<api::employee::BankAccount>,
        schedule: Option<api::schedule::ScheduleInput>,
        hourly_rate: Option<Money>,
        ctx: &Context,
    ) -> Result<api::Employee, Error> {
        let contract = domain::employee::Contract::try_from(contract)
            .map_err(ctx.error())?;
        let schedule = schedule
            .map(domain::employee::Schedule::try_from)
            .transpose()
            .map_err(ctx.error())?;

        ctx.service()
            .execute(command::CreateEmployee {
                employer_id: employer_id.map(Into::into),
                name: name.into(),
                email: email.into(),
                bank_account: bank_account.map(Into::into),
                role: role.into(),
                employment_type: employment_type.into(),
                projects: projects.map(project_set).unwrap_or_default(),
                contract,
                schedule,
                hourly_rate,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the provided details of the specified `Employee`.
    ///
    /// Omitted arguments are left untouched.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_INPUT` - `contract` is malformed;
    /// - `EMPLOYEE_NOT_EXISTS` - the `Employee` with the specified ID does
    ///                           not exist;
    /// - `EMPLOYER_NOT_EXISTS` - the `Employer` with the specified ID does
    ///                           not exist;
    /// - `EMAIL_OCCUPIED` - provided `Email` is used by another `Employee`;
    /// - `TOO_MANY_PROJECTS` - more `projects` than the `role` allows;
    /// - `INVALID_HOURLY_RATE` - `hourlyRate` is missing for a part-time
    ///                           `Employee` or is not positive;
    /// - `CONTRACT_CONFLICTS_EXTENSION` - new `contract` does not end
    ///                                    before the granted
    ///                                    `LeaveExtension`.
    #[tracing::instrument(
        skip_all,
        fields(
            employee_id = %employee_id,
            gql.name = "updateEmployee",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    #[expect(clippy::too_many_arguments, reason = "still readable")]
    pub async fn update_employee(
        employee_id: api::employee::Id,
        name: Option<api::contact::Name>,
        email: Option<api::contact::Email>,
        role: Option<api::employee::Role>,
        employment_type: Option<api::employee::EmploymentType>,
        contract: Option<api::employee::ContractInput>,
        projects: Option<Vec<api::employee::ProjectCode>>,
        employer_id: Option<api::employer::Id>,
        bank_account: Option<api::employee::BankAccount>,
        hourly_rate: Option<Money>,
        ctx: &Context,
    ) -> Result<api::Employee, Error> {
        let contract = contract
            .map(domain::employee::Contract::try_from)
            .transpose()
            .map_err(ctx.error())?;

        ctx.service()
            .execute(command::UpdateEmployee {
                employee_id: employee_id.into(),
                employer_id: employer_id.map(Into::into),
                name: name.map(Into::into),
                email: email.map(Into::into),
                bank_account: bank_account.map(Into::into),
                role: role.map(Into::into),
                employment_type: employment_type.map(Into::into),
                projects: projects.map(project_set),
                contract,
                hourly_rate,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Submits a new pending `LeaveRequest` of the specified `Employee`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_INPUT` - `startDate` is after `endDate`;
    /// - `EMPLOYEE_NOT_EXISTS` - the `Employee` with the specified ID does
    ///                           not exist;
    /// - `LEAVE_EXPIRED` - leave balance of the `Employee` has expired;
    /// - `INSUFFICIENT_LEAVE_BALANCE` - more days requested than available.
    #[tracing::instrument(
        skip_all,
        fields(
            employee_id = %employee_id,
            end_date = %end_date,
            gql.name = "submitLeaveRequest",
            kind = ?kind,
            otel.name = Self::SPAN_NAME,
            start_date = %start_date,
        ),
    )]
    pub async fn submit_leave_request(
        employee_id: api::employee::Id,
        start_date: Date,
        end_date: Date,
        kind: api::leave::Kind,
        reason: api::leave::Reason,
        ctx: &Context,
    ) -> Result<api::LeaveRequest, Error> {
        let period =
            api::leave::period(start_date, end_date).map_err(ctx.error())?;

        ctx.service()
            .execute(command::SubmitLeaveRequest {
                employee_id: employee_id.into(),
                period,
                kind: kind.into(),
                reason: reason.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Approves or rejects the specified pending `LeaveRequest`.
    ///
    /// Approval re-checks the leave balance of the requesting `Employee`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `LEAVE_REQUEST_NOT_EXISTS` - the `LeaveRequest` with the specified
    ///                                ID does not exist;
    /// - `REVIEWER_NOT_EXISTS` - the reviewing `Employee` does not exist;
    /// - `SELF_REVIEW` - the `Employee` reviews own `LeaveRequest`;
    /// - `NOT_PENDING` - the `LeaveRequest` has been reviewed already;
    /// - `LEAVE_EXPIRED` - leave balance of the `Employee` has expired;
    /// - `INSUFFICIENT_LEAVE_BALANCE` - more days requested than available.
    #[tracing::instrument(
        skip_all,
        fields(
            decision = ?decision,
            gql.name = "reviewLeaveRequest",
            otel.name = Self::SPAN_NAME,
            request_id = %request_id,
            reviewer_id = %reviewer_id,
        ),
    )]
    pub async fn review_leave_request(
        request_id: api::leave::Id,
        reviewer_id: api::employee::Id,
        decision: api::review::Decision,
        comment: Option<api::review::Comment>,
        ctx: &Context,
    ) -> Result<api::LeaveRequest, Error> {
        ctx.service()
            .execute(command::ReviewLeaveRequest {
                request_id: request_id.into(),
                reviewer_id: reviewer_id.into(),
                decision: decision.into(),
                comment: comment.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Grants a `LeaveExtension` to the specified `Employee`, replacing the
    /// existing one, if any.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `EMPLOYEE_NOT_EXISTS` - the `Employee` with the specified ID does
    ///                           not exist;
    /// - `APPROVER_NOT_EXISTS` - the approving `Employee` does not exist;
    /// - `EXTENSION_BEFORE_CONTRACT_END` - `extendedUntil` is not after
    ///                                     the contract end.
    #[tracing::instrument(
        skip_all,
        fields(
            approver_id = %approver_id,
            employee_id = %employee_id,
            extended_until = %extended_until,
            gql.name = "grantLeaveExtension",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn grant_leave_extension(
        employee_id: api::employee::Id,
        extended_until: Date,
        reason: api::leave::ExtensionReason,
        approver_id: api::employee::Id,
        ctx: &Context,
    ) -> Result<api::Employee, Error> {
        ctx.service()
            .execute(command::GrantLeaveExtension {
                employee_id: employee_id.into(),
                extended_until: extended_until.coerce(),
                reason: reason.into(),
                approver_id: approver_id.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Submits a new pending `ExpenseClaim` of the specified `Employee`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `EMPLOYEE_NOT_EXISTS` - the `Employee` with the specified ID does
    ///                           not exist;
    /// - `NON_POSITIVE_AMOUNT` - `amount` is zero or negative;
    /// - `INCURRED_IN_FUTURE` - `incurredOn` is in the future.
    #[tracing::instrument(
        skip_all,
        fields(
            amount = %amount,
            category = ?category,
            employee_id = %employee_id,
            gql.name = "submitExpenseClaim",
            incurred_on = %incurred_on,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn submit_expense_claim(
        employee_id: api::employee::Id,
        amount: Money,
        category: api::expense::Category,
        description: api::expense::Description,
        incurred_on: Date,
        project: Option<api::employee::ProjectCode>,
        ctx: &Context,
    ) -> Result<api::ExpenseClaim, Error> {
        ctx.service()
            .execute(command::SubmitExpenseClaim {
                employee_id: employee_id.into(),
                amount,
                category: category.into(),
                description: description.into(),
                incurred_on: incurred_on.coerce(),
                project: project.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Approves or rejects the specified pending `ExpenseClaim`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `EXPENSE_CLAIM_NOT_EXISTS` - the `ExpenseClaim` with the specified
    ///                                ID does not exist;
    /// - `REVIEWER_NOT_EXISTS` - the reviewing `Employee` does not exist;
    /// - `SELF_REVIEW` - the `Employee` reviews own `ExpenseClaim`;
    /// - `NOT_PENDING` - the `ExpenseClaim` has been reviewed already.
    #[tracing::instrument(
        skip_all,
        fields(
            claim_id = %claim_id,
            decision = ?decision,
            gql.name = "reviewExpenseClaim",
            otel.name = Self::SPAN_NAME,
            reviewer_id = %reviewer_id,
        ),
    )]
    pub async fn review_expense_claim(
        claim_id: api::expense::Id,
        reviewer_id: api::employee::Id,
        decision: api::review::Decision,
        comment: Option<api::review::Comment>,
        ctx: &Context,
    ) -> Result<api::ExpenseClaim, Error> {
        ctx.service()
            .execute(command::ReviewExpenseClaim {
                claim_id: claim_id.into(),
                reviewer_id: reviewer_id.into(),
                decision: decision.into(),
                comment: comment.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Requests a change of the specified `Employee`'s `Schedule`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_INPUT` - `requested` `Schedule` is malformed;
    /// - `EMPLOYEE_NOT_EXISTS` - the `Employee` with the specified ID does
    ///                           not exist;
    /// - `SAME_SCHEDULE` - `requested` `Schedule` equals the current one;
    /// - `EFFECTIVE_IN_PAST` - `effectiveOn` is in the past.
    #[tracing::instrument(
        skip_all,
        fields(
            effective_on = %effective_on,
            employee_id = %employee_id,
            gql.name = "requestScheduleChange",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn request_schedule_change(
        employee_id: api::employee::Id,
        requested: api::schedule::ScheduleInput,
        reason: api::schedule::ChangeReason,
        effective_on: Date,
        ctx: &Context,
    ) -> Result<api::ScheduleChange, Error> {
        let requested = domain::employee::Schedule::try_from(requested)
            .map_err(ctx.error())?;

        ctx.service()
            .execute(command::RequestScheduleChange {
                employee_id: employee_id.into(),
                requested,
                reason: reason.into(),
                effective_on: effective_on.coerce(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Approves or rejects the specified pending `ScheduleChange`.
    ///
    /// Approval replaces the `Schedule` of the requesting `Employee`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `SCHEDULE_CHANGE_NOT_EXISTS` - the `ScheduleChange` with the
    ///                                  specified ID does not exist;
    /// - `REVIEWER_NOT_EXISTS` - the reviewing `Employee` does not exist;
    /// - `SELF_REVIEW` - the `Employee` reviews own `ScheduleChange`;
    /// - `NOT_PENDING` - the `ScheduleChange` has been reviewed already.
    #[tracing::instrument(
        skip_all,
        fields(
            change_id = %change_id,
            decision = ?decision,
            gql.name = "reviewScheduleChange",
            otel.name = Self::SPAN_NAME,
            reviewer_id = %reviewer_id,
        ),
    )]
    pub async fn review_schedule_change(
        change_id: api::schedule::ChangeId,
        reviewer_id: api::employee::Id,
        decision: api::review::Decision,
        comment: Option<api::review::Comment>,
        ctx: &Context,
    ) -> Result<api::ScheduleChange, Error> {
        ctx.service()
            .execute(command::ReviewScheduleChange {
                change_id: change_id.into(),
                reviewer_id: reviewer_id.into(),
                decision: decision.into(),
                comment: comment.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Logs worked hours of the specified part-time `Employee`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_INPUT` - `endedAt` is not after `startedAt`;
    /// - `EMPLOYEE_NOT_EXISTS` - the `Employee` with the specified ID does
    ///                           not exist;
    /// - `NOT_PART_TIME` - the `Employee` is not a part-time one;
    /// - `PROJECT_NOT_ASSIGNED` - the `Employee` is not assigned to the
    ///                            `project`;
    /// - `FUTURE_DATE` - `date` is in the future.
    #[tracing::instrument(
        skip_all,
        fields(
            date = %date,
            employee_id = %employee_id,
            ended_at = %ended_at,
            gql.name = "logTime",
            otel.name = Self::SPAN_NAME,
            project = %project,
            started_at = %started_at,
        ),
    )]
    pub async fn log_time(
        employee_id: api::employee::Id,
        date: Date,
        started_at: TimeOfDay,
        ended_at: TimeOfDay,
        description: api::time_log::Description,
        project: api::employee::ProjectCode,
        ctx: &Context,
    ) -> Result<api::TimeLog, Error> {
        let shift =
            api::time_log::shift(started_at, ended_at).map_err(ctx.error())?;

        ctx.service()
            .execute(command::LogTime {
                employee_id: employee_id.into(),
                date: date.coerce(),
                shift,
                description: description.into(),
                project: project.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Approves or rejects the specified pending `TimeLog`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `TIME_LOG_NOT_EXISTS` - the `TimeLog` with the specified ID does
    ///                           not exist;
    /// - `REVIEWER_NOT_EXISTS` - the reviewing `Employee` does not exist;
    /// - `SELF_REVIEW` - the `Employee` reviews own `TimeLog`;
    /// - `NOT_PENDING` - the `TimeLog` has been reviewed already.
    #[tracing::instrument(
        skip_all,
        fields(
            decision = ?decision,
            gql.name = "reviewTimeLog",
            log_id = %log_id,
            otel.name = Self::SPAN_NAME,
            reviewer_id = %reviewer_id,
        ),
    )]
    pub async fn review_time_log(
        log_id: api::time_log::Id,
        reviewer_id: api::employee::Id,
        decision: api::review::Decision,
        comment: Option<api::review::Comment>,
        ctx: &Context,
    ) -> Result<api::TimeLog, Error> {
        ctx.service()
            .execute(command::ReviewTimeLog {
                log_id: log_id.into(),
                reviewer_id: reviewer_id.into(),
                decision: decision.into(),
                comment: comment.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Marks the specified `Notification` as read.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `NOTIFICATION_NOT_EXISTS` - the `Notification` with the specified
    ///                               ID does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "markNotificationRead",
            notification_id = %notification_id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn mark_notification_read(
        notification_id: api::notification::Id,
        ctx: &Context,
    ) -> Result<api::Notification, Error> {
        ctx.service()
            .execute(command::MarkNotificationRead {
                notification_id: notification_id.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }
}

/// Collects the provided [`api::employee::ProjectCode`]s into a set of
/// [`domain::Project`]s, dropping duplicates.
fn project_set(
    codes: Vec<api::employee::ProjectCode>,
) -> BTreeSet<domain::Project> {
    codes.into_iter().map(Into::into).collect()
}

define_error! {
    enum StaffingError {
        #[code = "TOO_MANY_PROJECTS"]
        #[status = BAD_REQUEST]
        #[message = "`Employee` is assigned to more `Project`s than the \
                     `EmployeeRole` allows"]
        TooManyProjects,

        #[code = "INVALID_HOURLY_RATE"]
        #[status = BAD_REQUEST]
        #[message = "Part-time `Employee` must have a positive hourly rate"]
        InvalidHourlyRate,
    }
}

define_error! {
    enum RequestError {
        #[code = "LEAVE_REQUEST_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`LeaveRequest` with the specified ID does not exist"]
        LeaveRequestNotExists,

        #[code = "EXPENSE_CLAIM_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`ExpenseClaim` with the specified ID does not exist"]
        ExpenseClaimNotExists,

        #[code = "SCHEDULE_CHANGE_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`ScheduleChange` with the specified ID does not exist"]
        ScheduleChangeNotExists,

        #[code = "TIME_LOG_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`TimeLog` with the specified ID does not exist"]
        TimeLogNotExists,
    }
}

impl AsError for command::create_employer::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::EmailOccupied(_) => {
                Some(api::ContactError::EmailOccupied.into())
            }
        }
    }
}

impl AsError for command::update_employer::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::EmployerNotExists(_) => api::EmployerError::NotExists.into(),
            Self::EmailOccupied(_) => api::ContactError::EmailOccupied.into(),
        })
    }
}

impl AsError for command::deactivate_employer::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::EmployerNotExists(_) => {
                Some(api::EmployerError::NotExists.into())
            }
        }
    }
}

impl AsError for command::create_employee::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::EmployerNotExists(_) => api::EmployerError::NotExists.into(),
            Self::EmailOccupied(_) => api::ContactError::EmailOccupied.into(),
            Self::TooManyProjects(_) => StaffingError::TooManyProjects.into(),
            Self::InvalidHourlyRate(_) => {
                StaffingError::InvalidHourlyRate.into()
            }
        })
    }
}

impl AsError for command::update_employee::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "CONTRACT_CONFLICTS_EXTENSION"]
                #[status = CONFLICT]
                #[message = "`LeaveExtension` must end after the contract \
                             ends"]
                ContractConflictsExtension,
            }
        }

        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::EmployeeNotExists(_) => api::EmployeeError::NotExists.into(),
            Self::EmployerNotExists(_) => api::EmployerError::NotExists.into(),
            Self::EmailOccupied(_) => api::ContactError::EmailOccupied.into(),
            Self::TooManyProjects(_) => StaffingError::TooManyProjects.into(),
            Self::InvalidHourlyRate(_) => {
                StaffingError::InvalidHourlyRate.into()
            }
            Self::ContractConflictsExtension => {
                Error::ContractConflictsExtension.into()
            }
        })
    }
}

impl AsError for command::submit_leave_request::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::EmployeeNotExists(_) => api::EmployeeError::NotExists.into(),
            Self::LeaveExpired(_) => api::LeaveError::Expired.into(),
            Self::InsufficientLeaveBalance { .. } => {
                api::LeaveError::InsufficientBalance.into()
            }
        })
    }
}

impl AsError for command::review_leave_request::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::LeaveRequestNotExists(_) => {
                RequestError::LeaveRequestNotExists.into()
            }
            Self::ReviewerNotExists(_) => {
                api::ReviewError::ReviewerNotExists.into()
            }
            Self::EmployeeNotExists(_) => api::EmployeeError::NotExists.into(),
            Self::SelfReview => api::ReviewError::SelfReview.into(),
            Self::NotPending(_) => api::ReviewError::NotPending.into(),
            Self::LeaveExpired(_) => api::LeaveError::Expired.into(),
            Self::InsufficientLeaveBalance { .. } => {
                api::LeaveError::InsufficientBalance.into()
            }
        })
    }
}

impl AsError for command::grant_leave_extension::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "APPROVER_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "Approving `Employee` does not exist"]
                ApproverNotExists,

                #[code = "EXTENSION_BEFORE_CONTRACT_END"]
                #[status = BAD_REQUEST]
                #[message = "`LeaveExtension` must end after the contract \
                             ends"]
                ExtensionBeforeContractEnd,
            }
        }

        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::EmployeeNotExists(_) => api::EmployeeError::NotExists.into(),
            Self::ApproverNotExists(_) => Error::ApproverNotExists.into(),
            Self::ExtensionBeforeContractEnd => {
                Error::ExtensionBeforeContractEnd.into()
            }
        })
    }
}

impl AsError for command::submit_expense_claim::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "NON_POSITIVE_AMOUNT"]
                #[status = BAD_REQUEST]
                #[message = "Claimed amount must be positive"]
                NonPositiveAmount,

                #[code = "INCURRED_IN_FUTURE"]
                #[status = BAD_REQUEST]
                #[message = "Expense cannot be incurred in the future"]
                IncurredInFuture,
            }
        }

        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::EmployeeNotExists(_) => api::EmployeeError::NotExists.into(),
            Self::NonPositiveAmount(_) => Error::NonPositiveAmount.into(),
            Self::IncurredInFuture(_) => Error::IncurredInFuture.into(),
        })
    }
}

impl AsError for command::review_expense_claim::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::ExpenseClaimNotExists(_) => {
                RequestError::ExpenseClaimNotExists.into()
            }
            Self::ReviewerNotExists(_) => {
                api::ReviewError::ReviewerNotExists.into()
            }
            Self::SelfReview => api::ReviewError::SelfReview.into(),
            Self::NotPending(_) => api::ReviewError::NotPending.into(),
        })
    }
}

impl AsError for command::request_schedule_change::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "SAME_SCHEDULE"]
                #[status = BAD_REQUEST]
                #[message = "Requested `Schedule` equals the current one"]
                SameSchedule,

                #[code = "EFFECTIVE_IN_PAST"]
                #[status = BAD_REQUEST]
                #[message = "`ScheduleChange` cannot be effective in the past"]
                EffectiveInPast,
            }
        }

        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::EmployeeNotExists(_) => api::EmployeeError::NotExists.into(),
            Self::SameSchedule => Error::SameSchedule.into(),
            Self::EffectiveInPast(_) => Error::EffectiveInPast.into(),
        })
    }
}

impl AsError for command::review_schedule_change::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::ScheduleChangeNotExists(_) => {
                RequestError::ScheduleChangeNotExists.into()
            }
            Self::ReviewerNotExists(_) => {
                api::ReviewError::ReviewerNotExists.into()
            }
            Self::EmployeeNotExists(_) => api::EmployeeError::NotExists.into(),
            Self::SelfReview => api::ReviewError::SelfReview.into(),
            Self::NotPending(_) => api::ReviewError::NotPending.into(),
        })
    }
}

impl AsError for command::log_time::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "PROJECT_NOT_ASSIGNED"]
                #[status = CONFLICT]
                #[message = "`Employee` is not assigned to the `Project`"]
                ProjectNotAssigned,

                #[code = "FUTURE_DATE"]
                #[status = BAD_REQUEST]
                #[message = "Time cannot be logged for a future `Date`"]
                FutureDate,
            }
        }

        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::EmployeeNotExists(_) => api::EmployeeError::NotExists.into(),
            Self::NotPartTime(_) => api::EmployeeError::NotPartTime.into(),
            Self::ProjectNotAssigned(_) => Error::ProjectNotAssigned.into(),
            Self::FutureDate(_) => Error::FutureDate.into(),
        })
    }
}

impl AsError for command::review_time_log::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::TimeLogNotExists(_) => RequestError::TimeLogNotExists.into(),
            Self::ReviewerNotExists(_) => {
                api::ReviewError::ReviewerNotExists.into()
            }
            Self::SelfReview => api::ReviewError::SelfReview.into(),
            Self::NotPending(_) => api::ReviewError::NotPending.into(),
        })
    }
}

impl AsError for command::mark_notification_read::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "NOTIFICATION_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Notification` with the specified ID does not \
                             exist"]
                NotificationNotExists,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::NotificationNotExists(_) => {
                Some(Error::NotificationNotExists.into())
            }
        }
    }
}

#[cfg(test)]
mod spec {
    use service::command::{
        self, request_schedule_change, review_time_log,
    };

    use crate::AsError as _;

    #[test]
    fn maps_review_errors_to_codes() {
        let err = review_time_log::ExecutionError::SelfReview
            .try_as_error()
            .unwrap();
        assert_eq!(err.code, "SELF_REVIEW");

        let err = request_schedule_change::ExecutionError::SameSchedule
            .try_as_error()
            .unwrap();
        assert_eq!(err.code, "SAME_SCHEDULE");
    }

    #[test]
    fn maps_extension_conflicts_to_codes() {
        use command::{
            grant_leave_extension::ExecutionError as G,
            update_employee::ExecutionError as E,
        };

        let err = E::ContractConflictsExtension.try_as_error().unwrap();
        assert_eq!(err.code, "CONTRACT_CONFLICTS_EXTENSION");
        assert_eq!(err.status_code, http::StatusCode::CONFLICT);

        let err = G::ExtensionBeforeContractEnd.try_as_error().unwrap();
        assert_eq!(err.code, "EXTENSION_BEFORE_CONTRACT_END");
        assert_eq!(err.status_code, http::StatusCode::BAD_REQUEST);
    }
}
