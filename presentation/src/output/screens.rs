//! Static screens: welcome banner, help, quick links, about

use colored::Colorize;
use medinfo_domain::{DISEASE_LINKS, EMERGENCY_NUMBER, FIRST_AID_LINKS, LinkCategory, QuickLink};

pub fn welcome() -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str("╭─────────────────────────────────────────────╮\n");
    output.push_str("│      MedInfo AI - ค้นหาข้อมูลโรคและการปฐมพยาบาล     │\n");
    output.push_str("╰─────────────────────────────────────────────╯\n");
    output.push('\n');
    output.push_str(&emergency_line());
    output.push_str("\n\n");
    output.push_str(&links());
    output.push_str(&format!(
        "พิมพ์คำค้นหา หรือ {} เพื่อดูคำสั่งทั้งหมด\n",
        "/help".cyan()
    ));
    output
}

pub fn emergency_line() -> String {
    format!(
        "{} {}",
        "เหตุฉุกเฉิน โทร".red().bold(),
        EMERGENCY_NUMBER.red().bold()
    )
}

pub fn help() -> String {
    let mut output = String::from("\nคำสั่ง:\n");
    for (command, description) in [
        ("/help, /h, /?", "แสดงคำสั่งทั้งหมด"),
        ("/links", "แสดงหัวข้อค้นหาด่วน"),
        ("/go <id>", "ค้นหาหัวข้อด่วน เช่น /go f1"),
        ("/retry", "ค้นหาคำล่าสุดอีกครั้ง"),
        ("/about", "เกี่ยวกับ MedInfo AI"),
        ("/quit, /exit, /q", "ออกจากโปรแกรม"),
    ] {
        output.push_str(&format!("  {:<18} - {}\n", command, description));
    }
    output.push('\n');
    output
}

/// Quick-link catalogue, grouped by category
pub fn links() -> String {
    let mut output = String::new();
    for (category, links) in [
        (LinkCategory::FirstAid, &FIRST_AID_LINKS[..]),
        (LinkCategory::Disease, &DISEASE_LINKS[..]),
    ] {
        output.push_str(&format!("{}\n", category.heading().cyan().bold()));
        for link in links {
            output.push_str(&link_line(link));
        }
        output.push('\n');
    }
    output
}

fn link_line(link: &QuickLink) -> String {
    format!(
        "  {:<4}{}  {}\n",
        link.id.yellow(),
        link.title.bold(),
        link.description.dimmed()
    )
}

pub fn about() -> String {
    format!(
        "\n{}\n{}\n\n{}\n\n{}\n{}\n\n{}\n",
        "เกี่ยวกับ MedInfo AI".cyan().bold(),
        "นวัตกรรม AI เพื่อยกระดับความรู้ด้านสุขภาพของคนไทย",
        "MedInfo AI ใช้ Gemini ร่วมกับ Google Search รวบรวมและสรุปข้อมูลโรค \
         และขั้นตอนปฐมพยาบาลให้เข้าใจง่ายและพร้อมใช้งานในสถานการณ์จริง \
         พร้อมแหล่งข้อมูลอ้างอิงทุกครั้ง",
        "ข้อจำกัดที่ควรทราบ".yellow().bold(),
        "ระบบนี้เป็นเพียงผู้ช่วยให้ข้อมูลเบื้องต้นเท่านั้น ไม่ใช่เครื่องมือวินิจฉัยโรค \
         ควรปรึกษาแพทย์ผู้เชี่ยวชาญทุกครั้งเพื่อความถูกต้อง",
        emergency_line()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_shows_emergency_number_and_links() {
        colored::control::set_override(false);
        let text = welcome();
        assert!(text.contains("1669"));
        assert!(text.contains("การทำ CPR"));
        assert!(text.contains("โรคเบาหวาน"));
    }

    #[test]
    fn test_links_lists_every_id_under_its_heading() {
        colored::control::set_override(false);
        let text = links();
        let first_aid = text.find(LinkCategory::FirstAid.heading()).unwrap();
        let disease = text.find(LinkCategory::Disease.heading()).unwrap();
        assert!(first_aid < disease);

        for link in FIRST_AID_LINKS.iter() {
            let pos = text.find(link.id).unwrap();
            assert!(pos > first_aid && pos < disease);
        }
        for link in DISEASE_LINKS.iter() {
            assert!(text.find(link.id).unwrap() > disease);
        }
    }

    #[test]
    fn test_help_lists_commands() {
        let text = help();
        for command in ["/help", "/links", "/go", "/retry", "/about", "/quit"] {
            assert!(text.contains(command), "missing {command}");
        }
    }

    #[test]
    fn test_about_mentions_limitations() {
        colored::control::set_override(false);
        assert!(about().contains("ไม่ใช่เครื่องมือวินิจฉัยโรค"));
    }
}
