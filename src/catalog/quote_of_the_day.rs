use crate::tools::descriptor::{EndpointDescriptor, HttpMethod, ParamSpec, ResponseShape};

pub const TOOLS: &[EndpointDescriptor] = &[
    EndpointDescriptor {
        name: "get_qod",
        description: "Gets `Quote of the Day` (QOD). Optional `category` param determines the category of returned quote of the day",
        method: HttpMethod::Get,
        path: "/qod",
        params: &[
            ParamSpec::string("category", "QOD Category (Used in public QOD only)"),
            ParamSpec::string(
                "language",
                "Language of the QOD. The language must be supported in our QOD system.",
            ),
            ParamSpec::string("id", "QOD defition id (Used in private QOD only)"),
        ],
        shape: ResponseShape::TypedQod,
    },
    EndpointDescriptor {
        name: "get_qod_categories",
        description: "Gets a list of `Quote of the Day` Categories.",
        method: HttpMethod::Get,
        path: "/qod/categories",
        params: &[
            ParamSpec::string(
                "language",
                "Language of the QOD category. The language must be supported in our QOD system.",
            ),
            ParamSpec::boolean(
                "detailed",
                "Return detailed information of the categories. Note the data format changes between the two values of this switch.",
            ),
        ],
        shape: ResponseShape::GenericObject,
    },
    EndpointDescriptor {
        name: "get_qod_languages",
        description: "Get the list of languages supported in `Quote of the Day`.",
        method: HttpMethod::Get,
        path: "/qod/languages",
        params: &[],
        shape: ResponseShape::GenericObject,
    },
];
