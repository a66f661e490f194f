// ============================================================================
// SECTIONS - Registro estático de secciones y subsecciones
// ============================================================================

use std::fmt;
use std::str::FromStr;

/// Par (región de contenido, botón de la navbar) de una sección
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionRoute {
    pub region_id: &'static str,
    pub nav_button_id: &'static str,
}

/// Secciones de primer nivel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Inicio,
    Abonos,
    Clientes,
    NuevaVenta,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Abonos,
        Section::Clientes,
        Section::NuevaVenta,
        Section::Inicio,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Section::Inicio => "inicio",
            Section::Abonos => "abonos",
            Section::Clientes => "clientes",
            Section::NuevaVenta => "nuevaVenta",
        }
    }

    pub fn route(&self) -> SectionRoute {
        match self {
            Section::Abonos => SectionRoute {
                region_id: "Formulario_Abonos",
                nav_button_id: "btnNabAbonos",
            },
            Section::Clientes => SectionRoute {
                region_id: "Formulario_Clientes",
                nav_button_id: "btnNabClientes",
            },
            Section::NuevaVenta => SectionRoute {
                region_id: "Formulario_NuevaVenta",
                nav_button_id: "btnNabNuevaVenta",
            },
            Section::Inicio => SectionRoute {
                region_id: "menu_inicio",
                nav_button_id: "btnNabInicio",
            },
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Section::Inicio)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Nombre de sección que no está en el registro
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.name() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Subsecciones dentro de "clientes"
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CustomerSection {
    General,
    Individual,
    Nuevo,
}

impl CustomerSection {
    pub const ALL: [CustomerSection; 3] = [
        CustomerSection::General,
        CustomerSection::Individual,
        CustomerSection::Nuevo,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CustomerSection::General => "general",
            CustomerSection::Individual => "individual",
            CustomerSection::Nuevo => "nuevo",
        }
    }

    pub fn region_id(&self) -> &'static str {
        match self {
            CustomerSection::General => "customer_general",
            CustomerSection::Individual => "customer_individual",
            CustomerSection::Nuevo => "customer_nuevo",
        }
    }
}

impl FromStr for CustomerSection {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(CustomerSection::General),
            "individual" => Ok(CustomerSection::Individual),
            "nuevo" | "new" => Ok(CustomerSection::Nuevo),
            other => Err(UnknownSection(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_round_trip_through_registry() {
        for section in Section::ALL {
            assert_eq!(section.name().parse::<Section>(), Ok(section));
        }
        assert_eq!("ventas".parse::<Section>(), Err(UnknownSection("ventas".to_string())));
    }

    #[test]
    fn registry_ids_are_distinct() {
        let regions: HashSet<_> = Section::ALL.iter().map(|s| s.route().region_id).collect();
        let buttons: HashSet<_> = Section::ALL.iter().map(|s| s.route().nav_button_id).collect();
        assert_eq!(regions.len(), Section::ALL.len());
        assert_eq!(buttons.len(), Section::ALL.len());
    }

    #[test]
    fn customer_section_accepts_english_alias() {
        assert_eq!("new".parse::<CustomerSection>(), Ok(CustomerSection::Nuevo));
        assert_eq!("nuevo".parse::<CustomerSection>(), Ok(CustomerSection::Nuevo));
        assert!("otro".parse::<CustomerSection>().is_err());
    }
}
