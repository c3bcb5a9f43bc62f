use specdoc::Section;

/// Find the section an instruction refers to by name.
///
/// The instruction is lower-cased and a section matches when its
/// lower-cased title appears as a substring of it. Roots are scanned in
/// document order; while a root is being scanned its direct subsections
/// are checked before moving on to the next root. The first lexical hit
/// wins, so earlier-declared sections take precedence when an instruction
/// could plausibly name more than one. No fuzzy matching, no scoring.
pub fn resolve<'a>(instruction: &str, sections: &'a [Section]) -> Option<&'a Section> {
    let instruction = instruction.to_lowercase();

    for section in sections {
        if instruction.contains(&section.title.to_lowercase()) {
            return Some(section);
        }
        for sub in &section.subsections {
            if instruction.contains(&sub.title.to_lowercase()) {
                return Some(sub);
            }
        }
    }

    None
}
