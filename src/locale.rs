//! Checklist and report wording.
//!
//! English is the default. Vietnamese keeps the wording of the banana-leaf
//! workshop handout the checklist was written from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::types::StrengthLabel;

/// Deserializes through [`FromStr`], so config files accept the same spellings
/// as `--locale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Locale {
    #[default]
    En,
    Vi,
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "vi" | "vietnamese" => Ok(Locale::Vi),
            _ => Err(AppError::UnknownLocale(s.to_string())),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Vi => write!(f, "vi"),
        }
    }
}

impl Locale {
    pub fn preparation_steps(self) -> [&'static str; 3] {
        match self {
            Locale::En => [
                "Wash the banana leaves thoroughly and let them drain.",
                "Cut the leaves into 0.5–1 cm pieces.",
                "Dry at 50–60°C or shade-dry for 1–2 hours.",
            ],
            Locale::Vi => [
                "Rửa sạch lá chuối, để ráo.",
                "Cắt lá thành miếng 0.5–1 cm.",
                "Sấy 50–60°C hoặc phơi bóng râm 1–2 giờ.",
            ],
        }
    }

    pub fn solvent_step(self, ethanol_pct: f64) -> String {
        match self {
            Locale::En => format!("Prepare {ethanol_pct}% ethanol."),
            Locale::Vi => format!("Chuẩn bị ethanol {ethanol_pct}%."),
        }
    }

    pub fn soak_step(self, temp_c: f64, time_h: f64) -> String {
        match self {
            Locale::En => format!("Soak at {temp_c}°C for {time_h} hours."),
            Locale::Vi => format!("Ngâm ở {temp_c}°C trong {time_h} giờ."),
        }
    }

    pub fn filter_step(self) -> &'static str {
        match self {
            Locale::En => "Filter the solution and concentrate if needed.",
            Locale::Vi => "Lọc dung dịch, cô đặc nếu cần.",
        }
    }

    pub fn scent_bead_step(self, mg_per_bead: f64, beads: u64) -> String {
        match self {
            Locale::En => format!(
                "Each bead needs ~{mg_per_bead} mg polyphenol → estimated {beads} beads."
            ),
            Locale::Vi => format!(
                "Mỗi viên cần ~{mg_per_bead} mg polyphenol → ước tính làm được {beads} viên."
            ),
        }
    }

    pub fn scent_bead_mixing(self) -> &'static str {
        match self {
            Locale::En => {
                "Mix activated carbon + polyphenol + starch paste, press into molds, dry 12–24h."
            }
            Locale::Vi => "Trộn than hoạt tính + polyphenol + hồ tinh bột, nén khuôn, sấy 12–24h.",
        }
    }

    pub fn bio_brick_step(self, residue_g: u64, bricks: u64) -> String {
        match self {
            Locale::En => format!(
                "Residue after extraction ~{residue_g} g → ~{bricks} mini bricks."
            ),
            Locale::Vi => format!("Bã sau chiết ~{residue_g} g → ~{bricks} viên gạch mini."),
        }
    }

    pub fn bio_brick_mixing(self) -> &'static str {
        match self {
            Locale::En => {
                "Mix residue + clay + rice husk/sawdust, press into molds and sun-dry, then oven-dry."
            }
            Locale::Vi => "Trộn bã + đất sét + trấu/mùn cưa, nén khuôn và phơi — sau đó sấy.",
        }
    }

    pub fn combined_step(self, beads: u64, bricks: u64) -> String {
        match self {
            Locale::En => format!("Estimate: {beads} scent beads + {bricks} mini bricks."),
            Locale::Vi => format!("Ước tính: {beads} viên hút mùi + {bricks} viên gạch mini."),
        }
    }

    pub fn safety_step(self) -> &'static str {
        match self {
            Locale::En => "Safety: wear gloves and keep away from open flame when using ethanol.",
            Locale::Vi => "Lưu ý an toàn: đeo găng tay, tránh lửa khi dùng ethanol.",
        }
    }

    pub fn strength_label(self, label: StrengthLabel) -> &'static str {
        match (self, label) {
            (Locale::En, StrengthLabel::Strong) => "Strong (dark)",
            (Locale::En, StrengthLabel::Medium) => "Medium",
            (Locale::En, StrengthLabel::Weak) => "Weak (pale)",
            (Locale::Vi, StrengthLabel::Strong) => "Mạnh (đậm)",
            (Locale::Vi, StrengthLabel::Medium) => "Trung bình",
            (Locale::Vi, StrengthLabel::Weak) => "Nhạt (yếu)",
        }
    }

    /// Expected-output lines when both products are made.
    pub fn combined_output_lines(self, beads: u64, bricks: u64) -> [String; 2] {
        match self {
            Locale::En => [
                format!("- {beads} scent beads"),
                format!("- {bricks} mini bricks"),
            ],
            Locale::Vi => [
                format!("- Hút mùi: {beads} viên"),
                format!("- Gạch: {bricks} viên"),
            ],
        }
    }

    pub fn report_headings(self) -> ReportHeadings {
        match self {
            Locale::En => ReportHeadings {
                results: "RESULTS",
                total_yield: "Estimated total polyphenol",
                yield_per_g: "Yield",
                per_g_unit: "mg GAE/g leaf",
                checklist: "Process checklist",
                expected_output: "Expected output",
                scent_beads: "scent beads",
                bio_bricks: "mini bricks",
                color: "Extract color analysis",
                strength: "Estimated polyphenol strength",
            },
            Locale::Vi => ReportHeadings {
                results: "KẾT QUẢ AI",
                total_yield: "Tổng polyphenol ước tính",
                yield_per_g: "Hiệu suất (mg/g)",
                per_g_unit: "mg GAE/g lá",
                checklist: "Checklist quy trình",
                expected_output: "Sản lượng dự kiến",
                scent_beads: "viên hút mùi",
                bio_bricks: "viên gạch mini",
                color: "Phân tích màu dịch chiết",
                strength: "Độ đậm polyphenol (ước lượng)",
            },
        }
    }
}

/// Section titles and unit names used by the text report.
#[derive(Debug, Clone, Copy)]
pub struct ReportHeadings {
    pub results: &'static str,
    pub total_yield: &'static str,
    pub yield_per_g: &'static str,
    pub per_g_unit: &'static str,
    pub checklist: &'static str,
    pub expected_output: &'static str,
    pub scent_beads: &'static str,
    pub bio_bricks: &'static str,
    pub color: &'static str,
    pub strength: &'static str,
}
