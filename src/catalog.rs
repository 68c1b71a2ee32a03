//! Built-in catalog of reference career paths
//!
//! The table is a process-lifetime constant; records are listed in their
//! canonical order, which the ranking uses to break score ties.

use crate::models::domain::{
    CareerRecord, EducationLevel::*, IndustryType::*, InterestType::*, JobType::*,
    MajorCategory::*, SkillSet, SkillTag::*,
};

pub const CATALOG_SIZE: usize = 30;

pub static CATALOG: [CareerRecord; CATALOG_SIZE] = [
    CareerRecord::new(1, Bachelor, Stem, SkillSet::of(&[Programming, DataAnalysis]), Technical, Internet, DataAnalyst),
    CareerRecord::new(2, Master, Business, SkillSet::of(&[BusinessAnalysis, Communication]), Managerial, Consulting, ConsultingAdvisor),
    CareerRecord::new(3, Bachelor, Humanities, SkillSet::of(&[Communication]), Creative, Fmcg, Marketing),
    CareerRecord::new(4, Master, Stem, SkillSet::of(&[Programming, BusinessAnalysis]), Analytical, Internet, Product),
    CareerRecord::new(5, Bachelor, Business, SkillSet::of(&[DataAnalysis, BusinessAnalysis]), Analytical, Finance, Operations),
    CareerRecord::new(6, Master, Stem, SkillSet::of(&[Programming]), Technical, Manufacturing, Product),
    CareerRecord::new(7, Bachelor, Stem, SkillSet::of(&[DataAnalysis]), Analytical, Internet, Operations),
    CareerRecord::new(8, Master, Business, SkillSet::of(&[Communication, BusinessAnalysis]), Managerial, Finance, Marketing),
    CareerRecord::new(9, Bachelor, Humanities, SkillSet::of(&[Communication]), Creative, Internet, Operations),
    CareerRecord::new(10, Master, Stem, SkillSet::of(&[Programming, DataAnalysis]), Technical, Internet, DataAnalyst),
    CareerRecord::new(11, Bachelor, Business, SkillSet::of(&[BusinessAnalysis]), Analytical, Fmcg, Product),
    CareerRecord::new(12, Master, Humanities, SkillSet::of(&[Communication]), Managerial, Consulting, ConsultingAdvisor),
    CareerRecord::new(13, Bachelor, Stem, SkillSet::of(&[Programming]), Technical, Manufacturing, DataAnalyst),
    CareerRecord::new(14, Master, Business, SkillSet::of(&[DataAnalysis, BusinessAnalysis]), Analytical, Finance, Product),
    CareerRecord::new(15, Bachelor, Humanities, SkillSet::of(&[Communication]), Creative, Fmcg, Marketing),
    CareerRecord::new(16, Master, Stem, SkillSet::of(&[Programming, Communication]), Managerial, Internet, Product),
    CareerRecord::new(17, Bachelor, Business, SkillSet::of(&[BusinessAnalysis]), Analytical, Consulting, Marketing),
    CareerRecord::new(18, Master, Humanities, SkillSet::of(&[Communication, DataAnalysis]), Analytical, Internet, Operations),
    CareerRecord::new(19, Bachelor, Stem, SkillSet::of(&[Programming, DataAnalysis]), Technical, Internet, Product),
    CareerRecord::new(20, Master, Business, SkillSet::of(&[BusinessAnalysis]), Managerial, Fmcg, Operations),
    CareerRecord::new(21, Bachelor, Humanities, SkillSet::of(&[Communication]), Creative, Consulting, ConsultingAdvisor),
    CareerRecord::new(22, Master, Stem, SkillSet::of(&[DataAnalysis]), Analytical, Manufacturing, DataAnalyst),
    CareerRecord::new(23, Bachelor, Business, SkillSet::of(&[BusinessAnalysis, Communication]), Managerial, Finance, Marketing),
    CareerRecord::new(24, Master, Humanities, SkillSet::of(&[Communication]), Creative, Internet, Product),
    CareerRecord::new(25, Bachelor, Stem, SkillSet::of(&[Programming]), Technical, Internet, Operations),
    CareerRecord::new(26, Master, Business, SkillSet::of(&[DataAnalysis]), Analytical, Fmcg, Product),
    CareerRecord::new(27, Bachelor, Humanities, SkillSet::of(&[Communication, BusinessAnalysis]), Analytical, Consulting, Marketing),
    CareerRecord::new(28, Master, Stem, SkillSet::of(&[Programming, DataAnalysis]), Technical, Internet, DataAnalyst),
    CareerRecord::new(29, Bachelor, Business, SkillSet::of(&[BusinessAnalysis]), Managerial, Finance, Operations),
    CareerRecord::new(30, Master, Humanities, SkillSet::of(&[Communication]), Creative, Fmcg, Marketing),
];

/// The full catalog in canonical order
pub fn catalog() -> &'static [CareerRecord] {
    &CATALOG
}

/// Look up a catalog record by id
pub fn find_record(id: u32) -> Option<&'static CareerRecord> {
    CATALOG.iter().find(|record| record.id == id)
}
