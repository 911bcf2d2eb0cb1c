use crate::endpoints::{
    lots::GetOnhandByLots,
    onhand::GetOnhand,
    purchase_orders::{DEFAULT_PICKER_NAME, ListPutawayDetails},
};

pub struct PurchaseOrderRepository {
    picker_name: String,
}

impl PurchaseOrderRepository {
    pub fn new() -> Self {
        Self {
            picker_name: DEFAULT_PICKER_NAME.to_string(),
        }
    }

    pub fn with_picker(mut self, picker_name: impl Into<String>) -> Self {
        self.picker_name = picker_name.into();
        self
    }

    pub fn list(&self) -> ListPutawayDetails {
        ListPutawayDetails::new().picker_name(self.picker_name.clone())
    }
}

#[derive(Default)]
pub struct OnhandRepository {
    organization_code: String,
}

impl OnhandRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_organization(mut self, organization_code: impl Into<String>) -> Self {
        self.organization_code = organization_code.into();
        self
    }

    pub fn get(&self) -> GetOnhand {
        GetOnhand::new(self.organization_code.clone())
    }
}

#[derive(Default)]
pub struct LotRepository {
    organization_code: String,
}

impl LotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_organization(mut self, organization_code: impl Into<String>) -> Self {
        self.organization_code = organization_code.into();
        self
    }

    pub fn list(&self) -> GetOnhandByLots {
        GetOnhandByLots::new(self.organization_code.clone())
    }
}
