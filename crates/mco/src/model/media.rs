/// One named medium from the V2 media dictionary
///
/// Values are kept in the raw cm-based units of the file; the conversion
/// to mm happens once, when a layer resolves against the dictionary.
#[derive(Debug, Clone, PartialEq)]
pub struct Medium {
    /// Name the layer list refers to
    pub name: String,
    /// Refractive index
    pub n: f64,
    /// Absorption coefficient (cm⁻¹, raw)
    pub mu_a: f64,
    /// Scattering coefficient (cm⁻¹, raw)
    pub mu_s: f64,
    /// Scattering anisotropy
    pub g: f64,
}

/// Ordered dictionary of the media named by a V2 file
///
/// Insertion order is the file order. Lookup is deterministic: the first
/// entry with a matching name wins, and a miss is reported to the caller
/// rather than defaulted.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Media {
    entries: Vec<Medium>,
}

impl Media {
    /// Append a medium in file order
    pub fn push(&mut self, medium: Medium) {
        self.entries.push(medium);
    }

    /// First medium with the given name, if any
    pub fn get(&self, name: &str) -> Option<&Medium> {
        self.entries.iter().find(|medium| medium.name == name)
    }

    /// Media in file order
    pub fn iter(&self) -> impl Iterator<Item = &Medium> {
        self.entries.iter()
    }

    /// Number of defined media
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no media have been defined
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, n: f64) -> Medium {
        Medium {
            name: name.to_string(),
            n,
            mu_a: 0.0,
            mu_s: 0.0,
            g: 0.0,
        }
    }

    #[test]
    fn lookup_is_deterministic() {
        let mut media = Media::default();
        media.push(named("air", 1.0));
        media.push(named("water", 1.33));
        media.push(named("air", 1.5)); // duplicate name, first wins

        assert_eq!(media.get("air").unwrap().n, 1.0);
        assert_eq!(media.get("water").unwrap().n, 1.33);
        assert!(media.get("tissue").is_none());
        assert_eq!(media.len(), 3);
    }
}
