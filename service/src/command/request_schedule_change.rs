//! [`Command`] for requesting a [`ScheduleChange`].

use common::{
    operations::{By, Insert, Select},
    Date, DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        employee::{self, Schedule},
        schedule_change, Employee, Review, ScheduleChange,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for requesting a change of the working [`Schedule`] of an
/// [`Employee`].
#[derive(Clone, Debug)]
pub struct RequestScheduleChange {
    /// ID of the requesting [`Employee`].
    pub employee_id: employee::Id,

    /// Requested [`Schedule`].
    pub requested: Schedule,

    /// [`schedule_change::Reason`] of the change.
    pub reason: schedule_change::Reason,

    /// [`Date`] the requested [`Schedule`] should become effective on.
    pub effective_on: schedule_change::EffectiveDate,
}

impl<Db> Command<RequestScheduleChange> for Service<Db>
where
    Db: Database<
            Select<By<Option<Employee>, employee::Id>>,
            Ok = Option<Employee>,
            Err = Traced<database::Error>,
        > + Database<Insert<ScheduleChange>, Err = Traced<database::Error>>,
{
    type Ok = ScheduleChange;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: RequestScheduleChange,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let RequestScheduleChange {
            employee_id,
            requested,
            reason,
            effective_on,
        } = cmd;

        if effective_on.coerce::<()>() < Date::today() {
            return Err(tracerr::new!(E::EffectiveInPast(
                effective_on.coerce(),
            )));
        }

        let employee = self
            .database()
            .execute(Select(By::<Option<Employee>, _>::new(employee_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::EmployeeNotExists(employee_id))
            .map_err(tracerr::wrap!())?;
        if employee.schedule == requested {
            return Err(tracerr::new!(E::SameSchedule));
        }

        let change = ScheduleChange {
            id: schedule_change::Id::new(),
            employee_id,
            current: employee.schedule,
            requested,
            reason,
            effective_on,
            review: Review::pending(),
            created_at: DateTime::now().coerce(),
        };
        self.database()
            .execute(Insert(change.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!(
            "`ScheduleChange(id: {})` requested by \
             `Employee(id: {employee_id})`",
            change.id,
        );
        Ok(change)
    }
}

/// Error of [`RequestScheduleChange`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Employee`] with the provided ID doesn't exist.
    #[display("`Employee(id: {_0})` does not exist")]
    EmployeeNotExists(#[error(not(source))] employee::Id),

    /// Requested [`Schedule`] equals the current one.
    #[display("Requested `Schedule` equals the current one")]
    SameSchedule,

    /// Requested [`Schedule`] would become effective in the past.
    #[display("`ScheduleChange` cannot be effective in the past: {_0}")]
    EffectiveInPast(#[error(not(source))] Date),
}

#[cfg(test)]
mod spec {
    use common::{operations::Insert, TimeOfDay};

    use crate::{
        command::{request_schedule_change::ExecutionError, Command as _},
        domain::{
            employee::{
                schedule::{Timezone, Weekday},
                Schedule,
            },
            schedule_change,
        },
        infra::Database as _,
        test_util::{self, from_today},
    };

    use super::RequestScheduleChange;

    fn four_day_week() -> Schedule {
        Schedule::new(
            [
                Weekday::Monday,
                Weekday::Tuesday,
                Weekday::Wednesday,
                Weekday::Thursday,
            ],
            TimeOfDay::new(8, 0).unwrap(),
            TimeOfDay::new(18, 0).unwrap(),
            Timezone::new("Europe/Berlin").unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn captures_current_schedule() {
        let svc = test_util::service();
        let employee = test_util::employee(from_today(-30), from_today(300));
        svc.database()
            .execute(Insert(employee.clone()))
            .await
            .unwrap();

        let change = svc
            .execute(RequestScheduleChange {
                employee_id: employee.id,
                requested: four_day_week(),
                reason: schedule_change::Reason::new("Part-time studies")
                    .unwrap(),
                effective_on: from_today(14).coerce(),
            })
            .await
            .unwrap();

        assert_eq!(change.current, Schedule::default());
        assert_eq!(change.requested, four_day_week());
        assert!(change.review.is_pending());
    }

    #[tokio::test]
    async fn rejects_unchanged_schedule() {
        let svc = test_util::service();
        let employee = test_util::employee(from_today(-30), from_today(300));
        svc.database()
            .execute(Insert(employee.clone()))
            .await
            .unwrap();

        let err = svc
            .execute(RequestScheduleChange {
                employee_id: employee.id,
                requested: Schedule::default(),
                reason: schedule_change::Reason::new("No idea").unwrap(),
                effective_on: from_today(14).coerce(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::SameSchedule));
    }
}
