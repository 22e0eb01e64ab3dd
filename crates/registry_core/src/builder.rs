//! Builder for procedure records.
//!
//! Hosts and tests assemble records fluently instead of spelling out the
//! full struct. The builder never rejects anything: it produces drafts, and
//! drafts are judged by the validation engine, not by construction.

use crate::record::{Procedure, ValveType};
use crate::value::Numeric;

/// Fluent builder for [`Procedure`] records.
///
/// # Example
///
/// ```rust
/// use registry_core::{ProcedureBuilder, ValveType};
///
/// let record = ProcedureBuilder::new("Mario", "Rossi")
///     .data_nascita("1948-03-15")
///     .altezza(175.0)
///     .peso(80.0)
///     .fe(55.0)
///     .data_procedura("2024-06-10")
///     .ora_inizio("08:30")
///     .ora_fine("10:00")
///     .tipo_valvola(ValveType::BalloonExpandable)
///     .modello_valvola("Edwards SAPIEN 3")
///     .dimensione_valvola(26.0)
///     .pre_dilatazione(true)
///     .build();
///
/// assert_eq!(record.full_name(), "Mario Rossi");
/// assert_eq!(record.duration_minutes(), Some(90));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProcedureBuilder {
    record: Procedure,
}

impl ProcedureBuilder {
    /// Starts a draft for the given patient.
    pub fn new(nome: impl Into<String>, cognome: impl Into<String>) -> Self {
        Self {
            record: Procedure {
                nome: nome.into(),
                cognome: cognome.into(),
                ..Procedure::default()
            },
        }
    }

    /// Sets the persisted identifier (absent on drafts).
    pub fn id(mut self, id: i64) -> Self {
        self.record.id = Some(id);
        self
    }

    /// Sets the birth date (`YYYY-MM-DD`).
    pub fn data_nascita(mut self, date: impl Into<String>) -> Self {
        self.record.data_nascita = date.into();
        self
    }

    /// Sets the height in cm.
    pub fn altezza(mut self, cm: f64) -> Self {
        self.record.altezza = Numeric::from(cm);
        self
    }

    /// Sets the weight in kg.
    pub fn peso(mut self, kg: f64) -> Self {
        self.record.peso = Numeric::from(kg);
        self
    }

    /// Sets the ejection fraction in %.
    pub fn fe(mut self, percent: f64) -> Self {
        self.record.fe = Numeric::from(percent);
        self
    }

    /// Sets the peak jet velocity in m/s.
    pub fn vmax(mut self, ms: f64) -> Self {
        self.record.vmax = Numeric::from(ms);
        self
    }

    /// Sets the peak gradient in mmHg.
    pub fn gmax(mut self, mmhg: f64) -> Self {
        self.record.gmax = Numeric::from(mmhg);
        self
    }

    /// Sets the mean gradient in mmHg.
    pub fn gmed(mut self, mmhg: f64) -> Self {
        self.record.gmed = Numeric::from(mmhg);
        self
    }

    /// Sets the aortic valve area in cm².
    pub fn ava(mut self, cm2: f64) -> Self {
        self.record.ava = Numeric::from(cm2);
        self
    }

    /// Sets the aortic annulus diameter in mm.
    pub fn anulus_aortico(mut self, mm: f64) -> Self {
        self.record.anulus_aortico = Numeric::from(mm);
        self
    }

    /// Marks a pre-existing prosthetic valve with its model and size.
    pub fn valvola_protesica(
        mut self,
        modello: impl Into<String>,
        dimensione: impl Into<String>,
    ) -> Self {
        self.record.valvola_protesica = true;
        self.record.protesica_modello = Some(modello.into());
        self.record.protesica_dimensione = Some(dimensione.into());
        self
    }

    /// Sets the cardiovascular risk factors, stored newline-separated.
    pub fn fattori_rischio<I, S>(mut self, factors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let joined = factors
            .into_iter()
            .map(Into::into)
            .collect::<Vec<_>>()
            .join("\n");
        self.record.fattori_rischio = (!joined.is_empty()).then_some(joined);
        self
    }

    /// Sets the procedure date (`YYYY-MM-DD`).
    pub fn data_procedura(mut self, date: impl Into<String>) -> Self {
        self.record.data_procedura = date.into();
        self
    }

    /// Sets the procedure start time (`HH:MM`).
    pub fn ora_inizio(mut self, time: impl Into<String>) -> Self {
        self.record.ora_inizio = time.into();
        self
    }

    /// Sets the procedure end time (`HH:MM`).
    pub fn ora_fine(mut self, time: impl Into<String>) -> Self {
        self.record.ora_fine = time.into();
        self
    }

    /// Sets the implanted valve type.
    pub fn tipo_valvola(mut self, tipo: ValveType) -> Self {
        self.record.tipo_valvola = Some(tipo);
        self
    }

    /// Sets the implanted valve model.
    pub fn modello_valvola(mut self, modello: impl Into<String>) -> Self {
        self.record.modello_valvola = modello.into();
        self
    }

    /// Sets the implanted valve size in mm.
    pub fn dimensione_valvola(mut self, mm: f64) -> Self {
        self.record.dimensione_valvola = Numeric::from(mm);
        self
    }

    /// Sets whether balloon pre-dilatation was performed.
    pub fn pre_dilatazione(mut self, done: bool) -> Self {
        self.record.pre_dilatazione = done;
        self
    }

    /// Sets whether balloon post-dilatation was performed.
    pub fn post_dilatazione(mut self, done: bool) -> Self {
        self.record.post_dilatazione = done;
        self
    }

    /// Finishes the draft.
    pub fn build(self) -> Procedure {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_a_draft() {
        let record = ProcedureBuilder::new("Anna", "Bianchi").build();
        assert_eq!(record.nome, "Anna");
        assert_eq!(record.cognome, "Bianchi");
        assert!(record.is_draft());
        assert!(record.altezza.is_absent());
    }

    #[test]
    fn test_prosthetic_group_is_set_together() {
        let record = ProcedureBuilder::new("Anna", "Bianchi")
            .valvola_protesica("Hancock II", "25")
            .build();
        assert!(record.valvola_protesica);
        assert_eq!(record.protesica_modello.as_deref(), Some("Hancock II"));
        assert_eq!(record.protesica_dimensione.as_deref(), Some("25"));
    }

    #[test]
    fn test_risk_factors_joined_with_newlines() {
        let record = ProcedureBuilder::new("Anna", "Bianchi")
            .fattori_rischio(["Ipertensione arteriosa", "Diabete mellito"])
            .build();
        assert_eq!(
            record.fattori_rischio.as_deref(),
            Some("Ipertensione arteriosa\nDiabete mellito")
        );

        let record = ProcedureBuilder::new("Anna", "Bianchi")
            .fattori_rischio(Vec::<String>::new())
            .build();
        assert!(record.fattori_rischio.is_none());
    }

    #[test]
    fn test_measurements_become_numbers() {
        let record = ProcedureBuilder::new("Anna", "Bianchi")
            .fe(55.0)
            .ava(0.8)
            .build();
        assert_eq!(record.fe.as_number(), Some(55.0));
        assert_eq!(record.ava.as_number(), Some(0.8));
    }
}
