use anyhow::Result as AnyResult;
use cw_multi_test::AppResponse;
use ubi_subsidy_indexer::error::ContractError;

pub fn assert_err(res: AnyResult<AppResponse>, err: ContractError) {
    match res {
        Ok(_) => panic!("Result was not an error"),
        Err(generic_err) => {
            let contract_err: ContractError = generic_err.downcast().unwrap();
            assert_eq!(contract_err, err);
        }
    }
}

/// Values of the `skipped` attribute on every log event of the response, in order
pub fn skipped_reasons(res: &AppResponse) -> Vec<String> {
    res.events
        .iter()
        .filter(|event| event.ty.starts_with("wasm-"))
        .flat_map(|event| event.attributes.iter())
        .filter(|attr| attr.key == "skipped")
        .map(|attr| attr.value.clone())
        .collect()
}

/// Value of `key` on the first log event of type `kind`
pub fn event_attribute(res: &AppResponse, kind: &str, key: &str) -> Option<String> {
    let ty = format!("wasm-{kind}");
    res.events
        .iter()
        .find(|event| event.ty == ty)
        .and_then(|event| event.attributes.iter().find(|attr| attr.key == key))
        .map(|attr| attr.value.clone())
}
