use serde::Serialize;

/// Service reference variant metadata as stamped into a request header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceReferenceVariant {
    pub service_reference: &'static str,
    pub service_reference_variant: &'static str,
    pub name: &'static str,
    pub critical: bool,
    pub on_demand: bool,
    pub future_dated: bool,
    pub dcc_scheduled: bool,
}

/// How the DCC should route a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandVariant {
    pub number: u8,
    pub description: &'static str,
    pub critical: bool,
    pub webservice: bool,
}

static SERVICE_REFERENCE_VARIANTS: &[ServiceReferenceVariant] = &[
    ServiceReferenceVariant {
        service_reference: "1.1",
        service_reference_variant: "1.1.1",
        name: "Update Import Tariff (Primary Element)",
        critical: true,
        on_demand: true,
        future_dated: true,
        dcc_scheduled: false,
    },
    ServiceReferenceVariant {
        service_reference: "1.1",
        service_reference_variant: "1.1.2",
        name: "Update Import Tariff (Secondary Element)",
        critical: true,
        on_demand: true,
        future_dated: true,
        dcc_scheduled: false,
    },
    ServiceReferenceVariant {
        service_reference: "1.2",
        service_reference_variant: "1.2.1",
        name: "Update Price (Primary Element)",
        critical: true,
        on_demand: true,
        future_dated: true,
        dcc_scheduled: false,
    },
    ServiceReferenceVariant {
        service_reference: "1.2",
        service_reference_variant: "1.2.2",
        name: "Update Price (Secondary Element)",
        critical: true,
        on_demand: true,
        future_dated: true,
        dcc_scheduled: false,
    },
];

static COMMAND_VARIANTS: &[CommandVariant] = &[
    CommandVariant {
        number: 1,
        description: "Non Critical Service Request, send to device via WAN",
        critical: false,
        webservice: false,
    },
    CommandVariant {
        number: 2,
        description: "Non Critical Service Request, return for local delivery",
        critical: false,
        webservice: false,
    },
    CommandVariant {
        number: 3,
        description: "Non Critical Service Request, send via WAN and return for local delivery",
        critical: false,
        webservice: false,
    },
    CommandVariant {
        number: 4,
        description: "Critical Service Request, send to device via WAN",
        critical: true,
        webservice: false,
    },
    CommandVariant {
        number: 5,
        description: "Critical Service Request, return for local delivery",
        critical: true,
        webservice: false,
    },
    CommandVariant {
        number: 6,
        description: "Critical Service Request, send via WAN and return for local delivery",
        critical: true,
        webservice: false,
    },
    CommandVariant {
        number: 7,
        description: "Non-device Service Request",
        critical: false,
        webservice: true,
    },
    CommandVariant {
        number: 8,
        description: "DCC Only Service Request",
        critical: false,
        webservice: true,
    },
];

/// Looks up a service reference variant by its dotted identifier.
pub fn lookup_srv(variant: &str) -> Option<&'static ServiceReferenceVariant> {
    SERVICE_REFERENCE_VARIANTS
        .iter()
        .find(|srv| srv.service_reference_variant == variant.trim())
}

pub fn lookup_cv(number: u8) -> Option<&'static CommandVariant> {
    COMMAND_VARIANTS.iter().find(|cv| cv.number == number)
}
