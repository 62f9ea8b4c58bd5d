//! Quick-link catalogue
//!
//! Ready-made queries for common emergencies and diseases. Choosing a link
//! submits its title as the query.

use crate::core::error::DomainError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkCategory {
    FirstAid,
    Disease,
}

impl LinkCategory {
    /// Section heading shown above the links
    pub fn heading(&self) -> &'static str {
        match self {
            LinkCategory::FirstAid => "คู่มือปฐมพยาบาลเบื้องต้น (First Aid)",
            LinkCategory::Disease => "ข้อมูลโรคที่พบบ่อย",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickLink {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: LinkCategory,
}

const fn link(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: LinkCategory,
) -> QuickLink {
    QuickLink {
        id,
        title,
        description,
        category,
    }
}

pub static FIRST_AID_LINKS: [QuickLink; 5] = [
    link("f1", "การทำ CPR", "ขั้นตอนการกู้ชีพเบื้องต้นที่ถูกต้อง", LinkCategory::FirstAid),
    link("f2", "สำลักอาหาร (Heimlich)", "วิธีช่วยเหลือเมื่อสิ่งของติดคอ", LinkCategory::FirstAid),
    link("f3", "แผลไฟไหม้ น้ำร้อนลวก", "การปฐมพยาบาลลดความรุนแรง", LinkCategory::FirstAid),
    link("f4", "เลือดไหลไม่หยุด", "การห้ามเลือดและทำแผลเบื้องต้น", LinkCategory::FirstAid),
    link("f5", "ไฟดูด ไฟฟ้าช็อต", "การช่วยเหลือผู้ถูกไฟฟ้าดูดอย่างปลอดภัย", LinkCategory::FirstAid),
];

pub static DISEASE_LINKS: [QuickLink; 4] = [
    link("d1", "ไข้เลือดออก", "อาการและการเฝ้าระวังภัยจากยุงลาย", LinkCategory::Disease),
    link("d2", "โควิด-19", "แนวทางการรักษาและสายพันธุ์ล่าสุด", LinkCategory::Disease),
    link("d3", "ออฟฟิศซินโดรม", "วิธีบรรเทาปวดหลังและคอจากการทำงาน", LinkCategory::Disease),
    link("d4", "โรคเบาหวาน", "การควบคุมน้ำตาลและโภชนาการ", LinkCategory::Disease),
];

/// National emergency medical hotline
pub const EMERGENCY_NUMBER: &str = "1669";

/// All links, first aid first
pub fn all_links() -> impl Iterator<Item = &'static QuickLink> {
    FIRST_AID_LINKS.iter().chain(DISEASE_LINKS.iter())
}

/// Look up a link by id (case-insensitive)
pub fn find_link(id: &str) -> Result<&'static QuickLink, DomainError> {
    all_links()
        .find(|link| link.id.eq_ignore_ascii_case(id.trim()))
        .ok_or_else(|| DomainError::UnknownQuickLink(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<_> = all_links().map(|l| l.id).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
        assert_eq!(total, 9);
    }

    #[test]
    fn test_find_link() {
        let link = find_link("F1").unwrap();
        assert_eq!(link.title, "การทำ CPR");
        assert_eq!(link.category, LinkCategory::FirstAid);
    }

    #[test]
    fn test_find_unknown_link() {
        assert_eq!(
            find_link("z9"),
            Err(DomainError::UnknownQuickLink("z9".to_string()))
        );
    }
}
