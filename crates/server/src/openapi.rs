use service::dto::{
    BadgeOut, CategoryOut, ClientLogoOut, ClientOut, ContactAck, ContactInfoOut, ContactMessageIn, DeviceOut, DistributorOut,
    HardwareBundle, HardwareFeatureOut, HeroOut, HomeBundle, ModuleOut, OfficeOut, StatOut, TestimonialOut,
};
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub detail: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::public::categories,
        crate::routes::public::clients_list,
        crate::routes::public::contact_info,
        crate::routes::public::contact_message,
        crate::routes::public::hardware_bundle,
        crate::routes::public::home_bundle,
        crate::routes::public::modules_list,
        crate::routes::public::module_detail,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            CategoryOut,
            ClientOut,
            ClientLogoOut,
            ContactInfoOut,
            ContactAck,
            ContactMessageIn,
            HardwareFeatureOut,
            DeviceOut,
            DistributorOut,
            OfficeOut,
            HardwareBundle,
            HeroOut,
            StatOut,
            TestimonialOut,
            BadgeOut,
            HomeBundle,
            ModuleOut,
        )
    ),
    tags(
        (name = "health"),
        (name = "clients"),
        (name = "contact"),
        (name = "hardware"),
        (name = "home"),
        (name = "modules")
    )
)]
pub struct ApiDoc;
