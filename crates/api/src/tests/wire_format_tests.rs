// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde_json::{Value, json};

use crate::{
    DeliveryInfo, DeliveryResponse, EmployeeInfo, EquipmentInfo, EquipmentRequest,
    EquipmentResponse, RemovedEquipmentResponse,
};

#[test]
fn test_employee_info_uses_listing_keys() {
    let info = EmployeeInfo {
        employee_id: 1,
        name: String::from("Ana"),
        cpf: String::from("111"),
    };

    let value: Value = serde_json::to_value(&info).unwrap();

    assert_eq!(value, json!({"id_funcionario": 1, "nome": "Ana", "cpf": "111"}));
}

#[test]
fn test_equipment_response_keys_differ_from_listing_keys() {
    let response = EquipmentResponse {
        status: String::from("success"),
        name: String::from("Luva"),
        description: String::from("Nitrile"),
        expiry: String::from("2027"),
    };
    let info = EquipmentInfo {
        equipment_id: 2,
        name: String::from("Luva"),
        description: String::from("Nitrile"),
        expiry: String::from("2027"),
    };
    let removed = RemovedEquipmentResponse {
        status: String::from("removido"),
        name: String::from("Luva"),
        description: String::from("Nitrile"),
    };

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"status": "success", "nome": "Luva", "descrição": "Nitrile", "validade": "2027"})
    );
    assert_eq!(
        serde_json::to_value(&info).unwrap(),
        json!({"id_epi": 2, "nome": "Luva", "descricao": "Nitrile", "validade": "2027"})
    );
    assert_eq!(
        serde_json::to_value(&removed).unwrap(),
        json!({"status": "removido", "nome": "Luva", "descrição": "Nitrile"})
    );
}

#[test]
fn test_equipment_request_accepts_both_description_spellings() {
    let accented: EquipmentRequest = serde_json::from_value(
        json!({"nome": "Luva", "descrição": "Nitrile", "validade": "2027"}),
    )
    .unwrap();
    let plain: EquipmentRequest = serde_json::from_value(
        json!({"nome": "Luva", "descricao": "Nitrile", "validade": "2027"}),
    )
    .unwrap();

    assert_eq!(accented, plain);
}

#[test]
fn test_delivery_keys() {
    let response = DeliveryResponse {
        status: String::from("success"),
        delivery_date: String::from("2026-03-01"),
        approval_code: 5,
        period: 30,
        employee_id: 1,
        equipment_id: 2,
    };
    let info = DeliveryInfo {
        delivery_id: 3,
        delivery_date: String::from("2026-03-01"),
        approval_code: 5,
        period: 30,
        equipment_id: 2,
        employee_id: 1,
    };

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "status": "success",
            "data de entrega": "2026-03-01",
            "ca": 5,
            "periodo": 30,
            "funcionario id": 1,
            "epi id": 2
        })
    );
    assert_eq!(
        serde_json::to_value(&info).unwrap(),
        json!({
            "id_entrega": 3,
            "data_entrega": "2026-03-01",
            "ca": 5,
            "periodo": 30,
            "epi_id": 2,
            "funcionario_id": 1
        })
    );
}
