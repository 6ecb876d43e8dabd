/// Compact form of a spell or ability name for the report.
///
/// "Lehudib's Crystal Spear" becomes "crystal spear", "Bolt of Fire" becomes
/// "fire b." and "Summon Ice Beast" becomes "ice beast". Shortening an
/// already short name leaves it unchanged.
pub fn shorten_spell_name(name: &str) -> String {
    let mut name = name.to_lowercase();

    if let Some(apostrophe) = name.find('\'') {
        if let Some(space) = name[apostrophe..].find(' ') {
            name = name[apostrophe + space + 1..].to_string();
        }
    }

    if let Some(pos) = name.find(" of ") {
        name = format!("{} {}", &name[pos + 4..], &name[..pos]);
    }

    if name != "summon undead" {
        if let Some(rest) = name.strip_prefix("summon ") {
            name = rest.to_string();
        }
    }

    if let Some(rest) = name.strip_suffix(" bolt") {
        name = format!("{} b.", rest);
    }

    name
}
