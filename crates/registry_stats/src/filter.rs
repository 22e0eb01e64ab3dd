//! Read-path filter pipeline.
//!
//! Stages apply in fixed order (text search, valve type, period), each one
//! narrowing the previous stage's output. Filtering only removes records,
//! never reorders them, and a stage whose configuration is the identity
//! sentinel passes its input through untouched.

use chrono::{Local, Months, NaiveDate};
use registry_core::{parse_date, FilterState, Period, Procedure, ValveFilter};

/// Keeps records whose patient name or valve model contains the query.
///
/// Matching is case-insensitive substring against `nome`, `cognome` and
/// `modello_valvola`; any one match keeps the record. A blank query is the
/// identity.
pub fn by_search_query(mut records: Vec<Procedure>, query: &str) -> Vec<Procedure> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return records;
    }

    records.retain(|record| {
        record.nome.to_lowercase().contains(&query)
            || record.cognome.to_lowercase().contains(&query)
            || record.modello_valvola.to_lowercase().contains(&query)
    });
    records
}

/// Keeps records matching the valve-type filter.
pub fn by_valve_type(mut records: Vec<Procedure>, filter: ValveFilter) -> Vec<Procedure> {
    if filter == ValveFilter::All {
        return records;
    }

    records.retain(|record| filter.matches(record.tipo_valvola));
    records
}

/// Keeps records whose procedure date falls on or after the period cutoff.
///
/// Records whose `data_procedura` does not parse cannot be placed in time
/// and are dropped while a period is active.
pub fn by_period(mut records: Vec<Procedure>, period: Period, today: NaiveDate) -> Vec<Procedure> {
    let Some(cutoff) = period_cutoff(period, today) else {
        return records;
    };

    records.retain(|record| matches!(parse_date(&record.data_procedura), Some(d) if d >= cutoff));
    records
}

/// Cutoff date for a period window, `None` when the period is `All`.
///
/// Calendar-month subtraction follows chrono's native rollover: subtracting
/// one month from March 31 lands on the last day of February.
pub fn period_cutoff(period: Period, today: NaiveDate) -> Option<NaiveDate> {
    let months = period.months_back()?;
    Some(
        today
            .checked_sub_months(Months::new(months))
            .unwrap_or(NaiveDate::MIN),
    )
}

/// Applies all three stages against a caller-supplied reference date.
///
/// Pure: same inputs, same output. The reference date anchors the period
/// stage and is normally today.
pub fn apply_on(records: &[Procedure], state: &FilterState, today: NaiveDate) -> Vec<Procedure> {
    let filtered = by_search_query(records.to_vec(), &state.search_query);
    let filtered = by_valve_type(filtered, state.tipo_valvola);
    by_period(filtered, state.period, today)
}

/// Applies all three stages anchored to the local calendar date.
pub fn apply(records: &[Procedure], state: &FilterState) -> Vec<Procedure> {
    apply_on(records, state, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use registry_core::{ProcedureBuilder, ValveType};

    fn record(nome: &str, cognome: &str, model: &str, date: &str) -> Procedure {
        ProcedureBuilder::new(nome, cognome)
            .data_procedura(date)
            .modello_valvola(model)
            .build()
    }

    fn sample_records() -> Vec<Procedure> {
        let mut balloon = record("Mario", "Rossi", "Edwards SAPIEN 3", "2024-06-01");
        balloon.tipo_valvola = Some(ValveType::BalloonExpandable);

        let mut selfx = record("Anna", "Bianchi", "Portico", "2024-03-10");
        selfx.tipo_valvola = Some(ValveType::SelfExpandable);

        let untyped = record("Luca", "Verdi", "Myval", "2023-11-20");

        vec![balloon, selfx, untyped]
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_search_matches_any_of_three_fields() {
        let records = sample_records();

        let by_last_name = by_search_query(records.clone(), "ROSSI");
        assert_eq!(by_last_name.len(), 1);
        assert_eq!(by_last_name[0].nome, "Mario");

        let by_model = by_search_query(records.clone(), "portico");
        assert_eq!(by_model.len(), 1);
        assert_eq!(by_model[0].nome, "Anna");

        let by_first_name = by_search_query(records, "luc");
        assert_eq!(by_first_name.len(), 1);
    }

    #[test]
    fn test_blank_search_is_identity() {
        let records = sample_records();
        assert_eq!(by_search_query(records.clone(), ""), records);
        assert_eq!(by_search_query(records.clone(), "   "), records);
    }

    #[test]
    fn test_valve_type_stage() {
        let records = sample_records();

        let balloon = by_valve_type(
            records.clone(),
            ValveFilter::Only(ValveType::BalloonExpandable),
        );
        assert_eq!(balloon.len(), 1);
        assert_eq!(balloon[0].nome, "Mario");

        // Records without a valve type never match a concrete filter
        let selfx = by_valve_type(records.clone(), ValveFilter::Only(ValveType::SelfExpandable));
        assert_eq!(selfx.len(), 1);

        assert_eq!(by_valve_type(records.clone(), ValveFilter::All), records);
    }

    #[test]
    fn test_period_stage_keeps_cutoff_day() {
        let records = vec![
            record("A", "A", "M", "2024-05-15"), // exactly the 1m cutoff
            record("B", "B", "M", "2024-05-14"), // one day before
            record("C", "C", "M", "2024-06-15"),
        ];

        let filtered = by_period(records, Period::OneMonth, today());
        let names: Vec<&str> = filtered.iter().map(|r| r.nome.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_period_windows() {
        let records = sample_records();

        let last_month = by_period(records.clone(), Period::OneMonth, today());
        assert_eq!(last_month.len(), 1);

        let six_months = by_period(records.clone(), Period::SixMonths, today());
        assert_eq!(six_months.len(), 2);

        let one_year = by_period(records.clone(), Period::OneYear, today());
        assert_eq!(one_year.len(), 3);

        assert_eq!(by_period(records.clone(), Period::All, today()), records);
    }

    #[test]
    fn test_period_drops_unparsable_dates() {
        let records = vec![
            record("A", "A", "M", "2024-06-01"),
            record("B", "B", "M", "not-a-date"),
            record("C", "C", "M", ""),
        ];

        let filtered = by_period(records.clone(), Period::OneMonth, today());
        assert_eq!(filtered.len(), 1);

        // Without an active period they pass through
        assert_eq!(by_period(records.clone(), Period::All, today()), records);
    }

    #[test]
    fn test_cutoff_month_rollover_clamps_to_month_end() {
        let march_31 = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        assert_eq!(
            period_cutoff(Period::OneMonth, march_31),
            Some(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );

        let march_31_2023 = NaiveDate::from_ymd_opt(2023, 3, 31).unwrap();
        assert_eq!(
            period_cutoff(Period::OneMonth, march_31_2023),
            Some(NaiveDate::from_ymd_opt(2023, 2, 28).unwrap())
        );

        assert_eq!(period_cutoff(Period::All, march_31), None);
    }

    #[test]
    fn test_one_year_is_twelve_calendar_months() {
        let leap_day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(
            period_cutoff(Period::OneYear, leap_day),
            Some(NaiveDate::from_ymd_opt(2023, 2, 28).unwrap())
        );
    }

    #[test]
    fn test_apply_identity_state_returns_input_unchanged() {
        let records = sample_records();
        let filtered = apply_on(&records, &FilterState::default(), today());
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let records = sample_records();
        let state = FilterState::new()
            .with_search("a")
            .with_period(Period::OneYear);

        let once = apply_on(&records, &state, today());
        let twice = apply_on(&once, &state, today());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_apply_stages_compose_and_preserve_order() {
        let mut records = sample_records();
        // Second balloon record, older than the window
        let mut old_balloon = record("Paolo", "Rosso", "Edwards SAPIEN 3", "2023-01-05");
        old_balloon.tipo_valvola = Some(ValveType::BalloonExpandable);
        records.push(old_balloon);

        let state = FilterState::new()
            .with_search("ross")
            .with_valve_type(ValveFilter::Only(ValveType::BalloonExpandable))
            .with_period(Period::OneYear);

        let filtered = apply_on(&records, &state, today());
        let names: Vec<&str> = filtered.iter().map(|r| r.nome.as_str()).collect();
        assert_eq!(names, vec!["Mario"]);
    }
}
