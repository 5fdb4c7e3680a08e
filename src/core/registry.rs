use crate::core::{AgencyRecord, AgencyType, FieldSupplier};
use crate::utils::error::{RegistryError, Result};
use std::io::Write;

/// Owning, insertion-ordered table of agency records.
///
/// Every lookup is a linear scan by name and the first match wins. Names are
/// not required to be unique.
#[derive(Debug, Default, Clone)]
pub struct AgencyRegistry {
    agencies: Vec<AgencyRecord>,
}

impl AgencyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.agencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agencies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AgencyRecord> {
        self.agencies.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.agencies.iter().map(AgencyRecord::name).collect()
    }

    pub fn add(&mut self, agency: AgencyRecord) {
        if self.find(agency.name()).is_some() {
            tracing::warn!(
                "Agency '{}' is already registered; lookups will keep returning the first entry",
                agency.name()
            );
        }
        tracing::debug!("Adding {} '{}'", agency.agency_type(), agency.name());
        self.agencies.push(agency);
    }

    pub fn find(&self, name: &str) -> Option<&AgencyRecord> {
        self.agencies.iter().find(|agency| agency.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut AgencyRecord> {
        self.agencies.iter_mut().find(|agency| agency.name() == name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.agencies.iter().position(|agency| agency.name() == name)
    }

    /// Takes the first agency with this name out of the table.
    /// An unknown name leaves the table as it was.
    pub fn remove(&mut self, name: &str) -> Option<AgencyRecord> {
        let index = self.position(name)?;
        let removed = self.agencies.remove(index);
        tracing::debug!("Removed {} '{}'", removed.agency_type(), removed.name());
        Some(removed)
    }

    /// Writes every record in insertion order, each followed by a blank line.
    pub fn display_all<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for agency in &self.agencies {
            agency.display_info(out)?;
            writeln!(out)?;
        }
        Ok(())
    }

    pub fn count_in_region(&self, region: &str) -> usize {
        self.agencies
            .iter()
            .filter(|agency| agency.location() == region)
            .count()
    }

    pub fn agencies_by_type(&self, agency_type: AgencyType) -> Vec<&AgencyRecord> {
        self.agencies
            .iter()
            .filter(|agency| agency.agency_type() == agency_type)
            .collect()
    }

    /// Same as `agencies_by_type`, starting from a discriminator string.
    /// A discriminator that names no known type matches nothing.
    pub fn agencies_by_type_name(&self, discriminator: &str) -> Vec<&AgencyRecord> {
        discriminator
            .parse::<AgencyType>()
            .map(|agency_type| self.agencies_by_type(agency_type))
            .unwrap_or_default()
    }

    /// Revocation deletes the agency, like `remove`, but an unknown name is reported.
    pub fn revoke_license(&mut self, name: &str) -> Result<AgencyRecord> {
        let revoked = self
            .remove(name)
            .ok_or_else(|| RegistryError::AgencyNotFound {
                name: name.to_string(),
            })?;
        tracing::info!(
            "Revoked license {} of '{}'",
            revoked.license_number(),
            revoked.name()
        );
        Ok(revoked)
    }

    /// Builds the variant named by `discriminator`, asking `supplier` for its fields,
    /// and adds it to the table.
    ///
    /// The discriminator is checked before the supplier is consulted, so an
    /// unsupported type never prompts.
    pub fn register_new_agency<F: FieldSupplier>(
        &mut self,
        name: &str,
        profile: &str,
        license_number: &str,
        location: &str,
        discriminator: &str,
        mut supplier: F,
    ) -> Result<&AgencyRecord> {
        let agency_type: AgencyType = discriminator.parse()?;
        let details = supplier.supply(agency_type)?;

        self.add(AgencyRecord::new(
            name,
            profile,
            license_number,
            location,
            details,
        ));
        tracing::info!("Registered {} '{}'", agency_type, name);

        let last = self.agencies.len() - 1;
        Ok(&self.agencies[last])
    }

    /// Sets one variant field on the first agency called `name`.
    ///
    /// Checks run in order: agency exists, discriminator is known, discriminator
    /// matches the stored variant, field belongs to the variant, value parses.
    /// Nothing is modified unless all of them pass.
    pub fn update_field(
        &mut self,
        name: &str,
        discriminator: &str,
        field: &str,
        value: &str,
    ) -> Result<()> {
        let agency = self
            .find_mut(name)
            .ok_or_else(|| RegistryError::AgencyNotFound {
                name: name.to_string(),
            })?;

        let declared: AgencyType = discriminator.parse()?;
        let actual = agency.agency_type();
        if declared != actual {
            return Err(RegistryError::TypeMismatch {
                name: name.to_string(),
                declared: declared.to_string(),
                actual: actual.to_string(),
            });
        }

        let field = declared.field(field)?;
        agency.set_field(field, value)?;
        tracing::debug!("Updated {} of '{}' to '{}'", field, name, value);
        Ok(())
    }
}

impl<'a> IntoIterator for &'a AgencyRegistry {
    type Item = &'a AgencyRecord;
    type IntoIter = std::slice::Iter<'a, AgencyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.agencies.iter()
    }
}
