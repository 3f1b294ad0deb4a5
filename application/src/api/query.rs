//! GraphQL [`Query`]s definitions.

use common::Date;
use juniper::graphql_object;
use service::{domain::leave, query, read, Query as _};

use crate::{api, AsError, Context, Error};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    pub(crate) const SPAN_NAME: &'static str = "GraphQL query";
}

#[graphql_object(context = Context)]
impl Query {
    /// Returns the `Employee` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `EMPLOYEE_NOT_EXISTS` - the `Employee` with the specified ID does
    ///                           not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "employee",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn employee(
        id: api::employee::Id,
        ctx: &Context,
    ) -> Result<api::Employee, Error> {
        ctx.service()
            .execute(query::employee::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| api::EmployeeError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Lists `Employee`s, newest first.
    ///
    /// `search` matches a substring of a name or an email, ignoring case.
    #[tracing::instrument(
        skip_all,
        fields(
            employment_type = ?employment_type,
            gql.name = "employees",
            otel.name = Self::SPAN_NAME,
            project = ?project.as_ref().map(ToString::to_string),
            role = ?role,
            search = ?search,
        ),
    )]
    pub async fn employees(
        search: Option<String>,
        role: Option<api::employee::Role>,
        project: Option<api::employee::ProjectCode>,
        employment_type: Option<api::employee::EmploymentType>,
        ctx: &Context,
    ) -> Result<Vec<api::Employee>, Error> {
        ctx.service()
            .execute(query::employees::List::by(read::employee::list::Filter {
                search: search.and_then(read::Search::new),
                role: role.map(Into::into),
                project: project.map(Into::into),
                employment_type: employment_type.map(Into::into),
                ..read::employee::list::Filter::default()
            }))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|list| list.into_iter().map(Into::into).collect())
    }

    /// Returns the `Employer` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `EMPLOYER_NOT_EXISTS` - the `Employer` with the specified ID does
    ///                           not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "employer",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn employer(
        id: api::employer::Id,
        ctx: &Context,
    ) -> Result<api::Employer, Error> {
        ctx.service()
            .execute(query::employer::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| api::EmployerError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Lists `Employer`s, newest first.
    ///
    /// `search` matches a substring of a name, a company name or an email,
    /// ignoring case.
    #[tracing::instrument(
        skip_all,
        fields(
            active = ?active,
            gql.name = "employers",
            otel.name = Self::SPAN_NAME,
            search = ?search,
        ),
    )]
    pub async fn employers(
        search: Option<String>,
        active: Option<bool>,
        ctx: &Context,
    ) -> Result<Vec<api::Employer>, Error> {
        ctx.service()
            .execute(query::employers::List::by(read::employer::list::Filter {
                search: search.and_then(read::Search::new),
                email: None,
                active,
            }))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|list| list.into_iter().map(Into::into).collect())
    }

    /// Computes the `LeaveBalance` of the specified `Employee` on the
    /// provided `Date` (today by default).
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `EMPLOYEE_NOT_EXISTS` - the `Employee` with the specified ID does
    ///                           not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            employee_id = %employee_id,
            gql.name = "leaveBalance",
            on = ?on.as_ref().map(ToString::to_string),
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn leave_balance(
        employee_id: api::employee::Id,
        on: Option<Date>,
        ctx: &Context,
    ) -> Result<api::leave::Balance, Error> {
        ctx.service()
            .execute(query::leave_balance::Balance {
                employee_id: employee_id.into(),
                on,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Computes a `LeaveBalance` for the provided contract window, without
    /// touching any stored `Employee`.
    ///
    /// `usedDays` defaults to `0`, and `on` defaults to today.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_INPUT` - `usedDays` is negative.
    #[tracing::instrument(
        skip_all,
        fields(
            contract_end = %contract_end,
            contract_start = %contract_start,
            extended_until = ?extended_until.as_ref().map(ToString::to_string),
            gql.name = "computeLeaveBalance",
            on = ?on.as_ref().map(ToString::to_string),
            otel.name = Self::SPAN_NAME,
            used_days = ?used_days,
        ),
    )]
    pub fn compute_leave_balance(
        contract_start: Date,
        contract_end: Date,
        used_days: Option<i32>,
        extended_until: Option<Date>,
        on: Option<Date>,
        ctx: &Context,
    ) -> Result<api::leave::Balance, Error> {
        let used_days = api::non_negative(used_days.unwrap_or_default())
            .map_err(Error::from)
            .map_err(ctx.error())?;
        let accrual = leave::Accrual {
            contract_start,
            contract_end,
            used_days,
            extended_until,
        };
        Ok(api::leave::Balance::compute(
            accrual,
            on.unwrap_or_else(Date::today),
            ctx.service().config().leave_expiry_warning,
        ))
    }

    /// Lists `LeaveRequest`s, newest first.
    #[tracing::instrument(
        skip_all,
        fields(
            employee_id = ?employee_id.map(|id| id.to_string()),
            gql.name = "leaveRequests",
            otel.name = Self::SPAN_NAME,
            status = ?status,
        ),
    )]
    pub async fn leave_requests(
        employee_id: Option<api::employee::Id>,
        status: Option<api::review::Status>,
        ctx: &Context,
    ) -> Result<Vec<api::LeaveRequest>, Error> {
        ctx.service()
            .execute(query::leave_requests::List::by(review_filter(
                employee_id,
                status,
            )))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|list| list.into_iter().map(Into::into).collect())
    }

    /// Lists `ExpenseClaim`s, newest first.
    #[tracing::instrument(
        skip_all,
        fields(
            employee_id = ?employee_id.map(|id| id.to_string()),
            gql.name = "expenseClaims",
            otel.name = Self::SPAN_NAME,
            status = ?status,
        ),
    )]
    pub async fn expense_claims(
        employee_id: Option<api::employee::Id>,
        status: Option<api::review::Status>,
        ctx: &Context,
    ) -> Result<Vec<api::ExpenseClaim>, Error> {
        ctx.service()
            .execute(query::expense_claims::List::by(review_filter(
                employee_id,
                status,
            )))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|list| list.into_iter().map(Into::into).collect())
    }

    /// Lists `ScheduleChange`s, newest first.
    #[tracing::instrument(
        skip_all,
        fields(
            employee_id = ?employee_id.map(|id| id.to_string()),
            gql.name = "scheduleChanges",
            otel.name = Self::SPAN_NAME,
            status = ?status,
        ),
    )]
    pub async fn schedule_changes(
        employee_id: Option<api::employee::Id>,
        status: Option<api::review::Status>,
        ctx: &Context,
    ) -> Result<Vec<api::ScheduleChange>, Error> {
        ctx.service()
            .execute(query::schedule_changes::List::by(review_filter(
                employee_id,
                status,
            )))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|list| list.into_iter().map(Into::into).collect())
    }

    /// Lists `TimeLog`s, newest first.
    ///
    /// `since` and `until` bound the work `Date` inclusively.
    #[tracing::instrument(
        skip_all,
        fields(
            employee_id = ?employee_id.map(|id| id.to_string()),
            gql.name = "timeLogs",
            otel.name = Self::SPAN_NAME,
            since = ?since.as_ref().map(ToString::to_string),
            status = ?status,
            until = ?until.as_ref().map(ToString::to_string),
        ),
    )]
    pub async fn time_logs(
        employee_id: Option<api::employee::Id>,
        status: Option<api::review::Status>,
        since: Option<Date>,
        until: Option<Date>,
        ctx: &Context,
    ) -> Result<Vec<api::TimeLog>, Error> {
        ctx.service()
            .execute(query::time_logs::List::by(read::time_log::list::Filter {
                employee_id: employee_id.map(Into::into),
                status: status.map(Into::into),
                since,
                until,
            }))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|list| list.into_iter().map(Into::into).collect())
    }

    /// Lists `Notification`s of the specified `Employee`, newest first.
    #[tracing::instrument(
        skip_all,
        fields(
            employee_id = %employee_id,
            gql.name = "notifications",
            otel.name = Self::SPAN_NAME,
            unread_only = ?unread_only,
        ),
    )]
    pub async fn notifications(
        employee_id: api::employee::Id,
        unread_only: Option<bool>,
        ctx: &Context,
    ) -> Result<Vec<api::Notification>, Error> {
        ctx.service()
            .execute(query::notifications::List::by(
                read::notification::list::Filter {
                    employee_id: Some(employee_id.into()),
                    unread_only: unread_only.unwrap_or_default(),
                    topic: None,
                },
            ))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|list| list.into_iter().map(Into::into).collect())
    }

    /// Calculates the `EarningsReport` of the specified part-time `Employee`
    /// for the provided period of `Date`s (inclusive).
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_INPUT` - `since` is after `until`;
    /// - `EMPLOYEE_NOT_EXISTS` - the `Employee` with the specified ID does
    ///                           not exist;
    /// - `NOT_PART_TIME` - the `Employee` is not a part-time one.
    #[tracing::instrument(
        skip_all,
        fields(
            employee_id = %employee_id,
            gql.name = "earningsReport",
            otel.name = Self::SPAN_NAME,
            since = %since,
            until = %until,
        ),
    )]
    pub async fn earnings_report(
        employee_id: api::employee::Id,
        since: Date,
        until: Date,
        ctx: &Context,
    ) -> Result<api::report::Earnings, Error> {
        if since > until {
            return Err(ctx.error()(api::InputError::Period.into()));
        }

        let report = query::report::Earnings {
            employee_id: employee_id.into(),
            since,
            until,
        };
        ctx.service()
            .execute(report)
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|output| api::report::Earnings::new(report, output))
    }
}

/// Builds a [`read::review::list::Filter`] out of the provided arguments.
fn review_filter(
    employee_id: Option<api::employee::Id>,
    status: Option<api::review::Status>,
) -> read::review::list::Filter {
    read::review::list::Filter {
        employee_id: employee_id.map(Into::into),
        status: status.map(Into::into),
    }
}

impl AsError for query::leave_balance::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::EmployeeNotExists(_) => {
                Some(api::EmployeeError::NotExists.into())
            }
        }
    }
}

impl AsError for query::report::earnings::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::EmployeeNotExists(_) => {
                Some(api::EmployeeError::NotExists.into())
            }
            Self::NotPartTime(_) => {
                Some(api::EmployeeError::NotPartTime.into())
            }
            Self::Overflow => None,
        }
    }
}
