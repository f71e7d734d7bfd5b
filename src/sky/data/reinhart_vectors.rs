// Reinhart sky, 577 patches in 6° bands.
// Patch centers band by band from the horizon, clockwise from north within a band,
// zenith cap last. x east, y north, z up.
[
    Vector3::new(0.0, 0.998629534754574, 0.052335956242944),
    Vector3::new(0.104385210641587, 0.993158937674856, 0.052335956242944),
    Vector3::new(0.207626755071376, 0.976807083442103, 0.052335956242944),
    Vector3::new(0.308593497323911, 0.949753126393135, 0.052335956242944),
    Vector3::new(0.406179224642424, 0.912293475342785, 0.052335956242944),
    Vector3::new(0.499314767377287, 0.864838546066896, 0.052335956242944),
    Vector3::new(0.586979713032432, 0.807908264701197, 0.052335956242944),
    Vector3::new(0.668213586118192, 0.742126371321759, 0.052335956242944),
    Vector3::new(0.742126371321759, 0.668213586118192, 0.052335956242944),
    Vector3::new(0.807908264701197, 0.586979713032432, 0.052335956242944),
    Vector3::new(0.864838546066896, 0.499314767377287, 0.052335956242944),
    Vector3::new(0.912293475342785, 0.406179224642424, 0.052335956242944),
    Vector3::new(0.949753126393135, 0.308593497323911, 0.052335956242944),
    Vector3::new(0.976807083442103, 0.207626755071376, 0.052335956242944),
    Vector3::new(0.993158937674856, 0.104385210641587, 0.052335956242944),
    Vector3::new(0.998629534754574, 0.0, 0.052335956242944),
    Vector3::new(0.993158937674856, -0.104385210641587, 0.052335956242944),
    Vector3::new(0.976807083442103, -0.207626755071376, 0.052335956242944),
    Vector3::new(0.949753126393135, -0.30859349732391, 0.052335956242944),
    Vector3::new(0.912293475342785, -0.406179224642424, 0.052335956242944),
    Vector3::new(0.864838546066896, -0.499314767377287, 0.052335956242944),
    Vector3::new(0.807908264701197, -0.586979713032432, 0.052335956242944),
    Vector3::new(0.742126371321759, -0.668213586118192, 0.052335956242944),
    Vector3::new(0.668213586118193, -0.742126371321759, 0.052335956242944),
    Vector3::new(0.586979713032432, -0.807908264701197, 0.052335956242944),
    Vector3::new(0.499314767377287, -0.864838546066896, 0.052335956242944),
    Vector3::new(0.406179224642424, -0.912293475342785, 0.052335956242944),
    Vector3::new(0.308593497323911, -0.949753126393135, 0.052335956242944),
    Vector3::new(0.207626755071376, -0.976807083442103, 0.052335956242944),
    Vector3::new(0.104385210641588, -0.993158937674856, 0.052335956242944),
    Vector3::new(0.0, -0.998629534754574, 0.052335956242944),
    Vector3::new(-0.104385210641587, -0.993158937674856, 0.052335956242944),
    Vector3::new(-0.207626755071376, -0.976807083442103, 0.052335956242944),
    Vector3::new(-0.30859349732391, -0.949753126393135, 0.052335956242944),
    Vector3::new(-0.406179224642424, -0.912293475342785, 0.052335956242944),
    Vector3::new(-0.499314767377287, -0.864838546066896, 0.052335956242944),
    Vector3::new(-0.586979713032432, -0.807908264701198, 0.052335956242944),
    Vector3::new(-0.668213586118192, -0.742126371321759, 0.052335956242944),
    Vector3::new(-0.742126371321759, -0.668213586118192, 0.052335956242944),
    Vector3::new(-0.807908264701197, -0.586979713032432, 0.052335956242944),
    Vector3::new(-0.864838546066896, -0.499314767377287, 0.052335956242944),
    Vector3::new(-0.912293475342785, -0.406179224642423, 0.052335956242944),
    Vector3::new(-0.949753126393135, -0.308593497323911, 0.052335956242944),
    Vector3::new(-0.976807083442103, -0.207626755071376, 0.052335956242944),
    Vector3::new(-0.993158937674856, -0.104385210641587, 0.052335956242944),
    Vector3::new(-0.998629534754574, 0.0, 0.052335956242944),
    Vector3::new(-0.993158937674856, 0.104385210641587, 0.052335956242944),
    Vector3::new(-0.976807083442103, 0.207626755071376, 0.052335956242944),
    Vector3::new(-0.949753126393135, 0.30859349732391, 0.052335956242944),
    Vector3::new(-0.912293475342785, 0.406179224642423, 0.052335956242944),
    Vector3::new(-0.864838546066896, 0.499314767377287, 0.052335956242944),
    Vector3::new(-0.807908264701198, 0.586979713032432, 0.052335956242944),
    Vector3::new(-0.74212637132176, 0.668213586118192, 0.052335956242944),
    Vector3::new(-0.668213586118192, 0.742126371321759, 0.052335956242944),
    Vector3::new(-0.586979713032432, 0.807908264701197, 0.052335956242944),
    Vector3::new(-0.499314767377287, 0.864838546066896, 0.052335956242944),
    Vector3::new(-0.406179224642423, 0.912293475342785, 0.052335956242944),
    Vector3::new(-0.308593497323911, 0.949753126393135, 0.052335956242944),
    Vector3::new(-0.207626755071376, 0.976807083442103, 0.052335956242944),
    Vector3::new(-0.104385210641587, 0.993158937674856, 0.052335956242944),
    Vector3::new(0.0, 0.987688340595138, 0.156434465040231),
    Vector3::new(0.103241544429788, 0.982277680521821, 0.156434465040231),
    Vector3::new(0.205351952894122, 0.966104980625888, 0.156434465040231),
    Vector3::new(0.305212482389889, 0.939347432391753, 0.156434465040231),
    Vector3::new(0.401729040058774, 0.902298197117246, 0.156434465040231),
    Vector3::new(0.493844170297569, 0.855363193977086, 0.156434465040231),
    Vector3::new(0.580548640463047, 0.799056652687458, 0.156434465040231),
    Vector3::new(0.660892498235999, 0.733995479497631, 0.156434465040231),
    Vector3::new(0.733995479497631, 0.660892498235999, 0.156434465040231),
    Vector3::new(0.799056652687458, 0.580548640463047, 0.156434465040231),
    Vector3::new(0.855363193977086, 0.493844170297569, 0.156434465040231),
    Vector3::new(0.902298197117246, 0.401729040058774, 0.156434465040231),
    Vector3::new(0.939347432391753, 0.305212482389889, 0.156434465040231),
    Vector3::new(0.966104980625888, 0.205351952894122, 0.156434465040231),
    Vector3::new(0.982277680521821, 0.103241544429788, 0.156434465040231),
    Vector3::new(0.987688340595138, 0.0, 0.156434465040231),
    Vector3::new(0.982277680521821, -0.103241544429789, 0.156434465040231),
    Vector3::new(0.966104980625888, -0.205351952894122, 0.156434465040231),
    Vector3::new(0.939347432391753, -0.305212482389889, 0.156434465040231),
    Vector3::new(0.902298197117246, -0.401729040058774, 0.156434465040231),
    Vector3::new(0.855363193977086, -0.493844170297569, 0.156434465040231),
    Vector3::new(0.799056652687458, -0.580548640463047, 0.156434465040231),
    Vector3::new(0.733995479497631, -0.660892498235999, 0.156434465040231),
    Vector3::new(0.660892498235999, -0.733995479497631, 0.156434465040231),
    Vector3::new(0.580548640463047, -0.799056652687458, 0.156434465040231),
    Vector3::new(0.493844170297569, -0.855363193977086, 0.156434465040231),
    Vector3::new(0.401729040058774, -0.902298197117246, 0.156434465040231),
    Vector3::new(0.305212482389889, -0.939347432391753, 0.156434465040231),
    Vector3::new(0.205351952894122, -0.966104980625888, 0.156434465040231),
    Vector3::new(0.103241544429789, -0.982277680521821, 0.156434465040231),
    Vector3::new(0.0, -0.987688340595138, 0.156434465040231),
    Vector3::new(-0.103241544429789, -0.982277680521821, 0.156434465040231),
    Vector3::new(-0.205351952894122, -0.966104980625888, 0.156434465040231),
    Vector3::new(-0.305212482389889, -0.939347432391753, 0.156434465040231),
    Vector3::new(-0.401729040058774, -0.902298197117246, 0.156434465040231),
    Vector3::new(-0.493844170297569, -0.855363193977086, 0.156434465040231),
    Vector3::new(-0.580548640463047, -0.799056652687458, 0.156434465040231),
    Vector3::new(-0.660892498235999, -0.733995479497631, 0.156434465040231),
    Vector3::new(-0.733995479497631, -0.660892498235999, 0.156434465040231),
    Vector3::new(-0.799056652687458, -0.580548640463047, 0.156434465040231),
    Vector3::new(-0.855363193977086, -0.493844170297569, 0.156434465040231),
    Vector3::new(-0.902298197117246, -0.401729040058774, 0.156434465040231),
    Vector3::new(-0.939347432391753, -0.305212482389889, 0.156434465040231),
    Vector3::new(-0.966104980625888, -0.205351952894123, 0.156434465040231),
    Vector3::new(-0.982277680521821, -0.103241544429788, 0.156434465040231),
    Vector3::new(-0.987688340595138, 0.0, 0.156434465040231),
    Vector3::new(-0.982277680521821, 0.103241544429788, 0.156434465040231),
    Vector3::new(-0.966104980625888, 0.205351952894122, 0.156434465040231),
    Vector3::new(-0.939347432391753, 0.305212482389889, 0.156434465040231),
    Vector3::new(-0.902298197117246, 0.401729040058774, 0.156434465040231),
    Vector3::new(-0.855363193977086, 0.493844170297569, 0.156434465040231),
    Vector3::new(-0.799056652687458, 0.580548640463047, 0.156434465040231),
    Vector3::new(-0.733995479497631, 0.660892498235999, 0.156434465040231),
    Vector3::new(-0.660892498235999, 0.733995479497631, 0.156434465040231),
    Vector3::new(-0.580548640463047, 0.799056652687458, 0.156434465040231),
    Vector3::new(-0.493844170297569, 0.855363193977086, 0.156434465040231),
    Vector3::new(-0.401729040058774, 0.902298197117246, 0.156434465040231),
    Vector3::new(-0.305212482389889, 0.939347432391753, 0.156434465040231),
    Vector3::new(-0.205351952894123, 0.966104980625888, 0.156434465040231),
    Vector3::new(-0.103241544429788, 0.982277680521821, 0.156434465040231),
    Vector3::new(0.0, 0.965925826289068, 0.258819045102521),
    Vector3::new(0.100966742252535, 0.96063438354617, 0.258819045102521),
    Vector3::new(0.200827271748301, 0.944818029471471, 0.258819045102521),
    Vector3::new(0.298487495628985, 0.918650051349999, 0.258819045102521),
    Vector3::new(0.392877428045034, 0.882417151026054, 0.258819045102521),
    Vector3::new(0.482962913144534, 0.836516303737808, 0.258819045102521),
    Vector3::new(0.567756955501136, 0.78145040877352, 0.258819045102521),
    Vector3::new(0.646330533842485, 0.717822779601697, 0.258819045102521),
    Vector3::new(0.717822779601697, 0.646330533842485, 0.258819045102521),
    Vector3::new(0.78145040877352, 0.567756955501136, 0.258819045102521),
    Vector3::new(0.836516303737808, 0.482962913144534, 0.258819045102521),
    Vector3::new(0.882417151026054, 0.392877428045034, 0.258819045102521),
    Vector3::new(0.918650051349999, 0.298487495628985, 0.258819045102521),
    Vector3::new(0.944818029471471, 0.200827271748302, 0.258819045102521),
    Vector3::new(0.96063438354617, 0.100966742252535, 0.258819045102521),
    Vector3::new(0.965925826289068, 0.0, 0.258819045102521),
    Vector3::new(0.96063438354617, -0.100966742252535, 0.258819045102521),
    Vector3::new(0.944818029471471, -0.200827271748301, 0.258819045102521),
    Vector3::new(0.918650051349999, -0.298487495628985, 0.258819045102521),
    Vector3::new(0.882417151026054, -0.392877428045034, 0.258819045102521),
    Vector3::new(0.836516303737808, -0.482962913144534, 0.258819045102521),
    Vector3::new(0.78145040877352, -0.567756955501135, 0.258819045102521),
    Vector3::new(0.717822779601697, -0.646330533842485, 0.258819045102521),
    Vector3::new(0.646330533842486, -0.717822779601697, 0.258819045102521),
    Vector3::new(0.567756955501136, -0.78145040877352, 0.258819045102521),
    Vector3::new(0.482962913144534, -0.836516303737808, 0.258819045102521),
    Vector3::new(0.392877428045034, -0.882417151026054, 0.258819045102521),
    Vector3::new(0.298487495628986, -0.918650051349999, 0.258819045102521),
    Vector3::new(0.200827271748301, -0.944818029471471, 0.258819045102521),
    Vector3::new(0.100966742252535, -0.96063438354617, 0.258819045102521),
    Vector3::new(0.0, -0.965925826289068, 0.258819045102521),
    Vector3::new(-0.100966742252535, -0.96063438354617, 0.258819045102521),
    Vector3::new(-0.200827271748302, -0.944818029471471, 0.258819045102521),
    Vector3::new(-0.298487495628985, -0.918650051349999, 0.258819045102521),
    Vector3::new(-0.392877428045034, -0.882417151026054, 0.258819045102521),
    Vector3::new(-0.482962913144534, -0.836516303737808, 0.258819045102521),
    Vector3::new(-0.567756955501135, -0.78145040877352, 0.258819045102521),
    Vector3::new(-0.646330533842485, -0.717822779601697, 0.258819045102521),
    Vector3::new(-0.717822779601698, -0.646330533842485, 0.258819045102521),
    Vector3::new(-0.78145040877352, -0.567756955501136, 0.258819045102521),
    Vector3::new(-0.836516303737808, -0.482962913144535, 0.258819045102521),
    Vector3::new(-0.882417151026054, -0.392877428045034, 0.258819045102521),
    Vector3::new(-0.918650051349999, -0.298487495628986, 0.258819045102521),
    Vector3::new(-0.944818029471471, -0.200827271748302, 0.258819045102521),
    Vector3::new(-0.96063438354617, -0.100966742252535, 0.258819045102521),
    Vector3::new(-0.965925826289068, 0.0, 0.258819045102521),
    Vector3::new(-0.96063438354617, 0.100966742252534, 0.258819045102521),
    Vector3::new(-0.944818029471471, 0.200827271748302, 0.258819045102521),
    Vector3::new(-0.918650051349999, 0.298487495628985, 0.258819045102521),
    Vector3::new(-0.882417151026055, 0.392877428045034, 0.258819045102521),
    Vector3::new(-0.836516303737808, 0.482962913144534, 0.258819045102521),
    Vector3::new(-0.78145040877352, 0.567756955501135, 0.258819045102521),
    Vector3::new(-0.717822779601698, 0.646330533842485, 0.258819045102521),
    Vector3::new(-0.646330533842485, 0.717822779601697, 0.258819045102521),
    Vector3::new(-0.567756955501136, 0.78145040877352, 0.258819045102521),
    Vector3::new(-0.482962913144535, 0.836516303737808, 0.258819045102521),
    Vector3::new(-0.392877428045034, 0.882417151026054, 0.258819045102521),
    Vector3::new(-0.298487495628986, 0.918650051349999, 0.258819045102521),
    Vector3::new(-0.200827271748302, 0.944818029471471, 0.258819045102521),
    Vector3::new(-0.100966742252535, 0.96063438354617, 0.258819045102521),
    Vector3::new(0.0, 0.933580426497202, 0.3583679495453),
    Vector3::new(0.097585727318513, 0.928466175238718, 0.3583679495453),
    Vector3::new(0.194102284987398, 0.913179454270281, 0.3583679495453),
    Vector3::new(0.288492217403447, 0.887887748105772, 0.3583679495453),
    Vector3::new(0.379721368714746, 0.852868157970561, 0.3583679495453),
    Vector3::new(0.466790213248601, 0.808504365822488, 0.3583679495453),
    Vector3::new(0.548744806523972, 0.755282430652048, 0.3583679495453),
    Vector3::new(0.624687236866834, 0.693785463118374, 0.3583679495453),
    Vector3::new(0.693785463118374, 0.624687236866834, 0.3583679495453),
    Vector3::new(0.755282430652048, 0.548744806523972, 0.3583679495453),
    Vector3::new(0.808504365822488, 0.466790213248601, 0.3583679495453),
    Vector3::new(0.852868157970561, 0.379721368714746, 0.3583679495453),
    Vector3::new(0.887887748105772, 0.288492217403447, 0.3583679495453),
    Vector3::new(0.913179454270281, 0.194102284987398, 0.3583679495453),
    Vector3::new(0.928466175238718, 0.097585727318513, 0.3583679495453),
    Vector3::new(0.933580426497202, 0.0, 0.3583679495453),
    Vector3::new(0.928466175238718, -0.097585727318513, 0.3583679495453),
    Vector3::new(0.913179454270281, -0.194102284987398, 0.3583679495453),
    Vector3::new(0.887887748105772, -0.288492217403447, 0.3583679495453),
    Vector3::new(0.852868157970561, -0.379721368714746, 0.3583679495453),
    Vector3::new(0.808504365822488, -0.466790213248601, 0.3583679495453),
    Vector3::new(0.755282430652048, -0.548744806523972, 0.3583679495453),
    Vector3::new(0.693785463118374, -0.624687236866834, 0.3583679495453),
    Vector3::new(0.624687236866834, -0.693785463118374, 0.3583679495453),
    Vector3::new(0.548744806523973, -0.755282430652048, 0.3583679495453),
    Vector3::new(0.466790213248601, -0.808504365822488, 0.3583679495453),
    Vector3::new(0.379721368714746, -0.852868157970561, 0.3583679495453),
    Vector3::new(0.288492217403447, -0.887887748105772, 0.3583679495453),
    Vector3::new(0.194102284987398, -0.913179454270281, 0.3583679495453),
    Vector3::new(0.097585727318513, -0.928466175238718, 0.3583679495453),
    Vector3::new(0.0, -0.933580426497202, 0.3583679495453),
    Vector3::new(-0.097585727318513, -0.928466175238718, 0.3583679495453),
    Vector3::new(-0.194102284987398, -0.913179454270281, 0.3583679495453),
    Vector3::new(-0.288492217403447, -0.887887748105772, 0.3583679495453),
    Vector3::new(-0.379721368714746, -0.852868157970561, 0.3583679495453),
    Vector3::new(-0.466790213248601, -0.808504365822488, 0.3583679495453),
    Vector3::new(-0.548744806523972, -0.755282430652048, 0.3583679495453),
    Vector3::new(-0.624687236866834, -0.693785463118374, 0.3583679495453),
    Vector3::new(-0.693785463118374, -0.624687236866834, 0.3583679495453),
    Vector3::new(-0.755282430652048, -0.548744806523973, 0.3583679495453),
    Vector3::new(-0.808504365822487, -0.466790213248601, 0.3583679495453),
    Vector3::new(-0.852868157970561, -0.379721368714746, 0.3583679495453),
    Vector3::new(-0.887887748105772, -0.288492217403447, 0.3583679495453),
    Vector3::new(-0.913179454270281, -0.194102284987399, 0.3583679495453),
    Vector3::new(-0.928466175238718, -0.097585727318513, 0.3583679495453),
    Vector3::new(-0.933580426497202, 0.0, 0.3583679495453),
    Vector3::new(-0.928466175238718, 0.097585727318513, 0.3583679495453),
    Vector3::new(-0.913179454270281, 0.194102284987398, 0.3583679495453),
    Vector3::new(-0.887887748105772, 0.288492217403447, 0.3583679495453),
    Vector3::new(-0.852868157970561, 0.379721368714745, 0.3583679495453),
    Vector3::new(-0.808504365822488, 0.466790213248601, 0.3583679495453),
    Vector3::new(-0.755282430652048, 0.548744806523972, 0.3583679495453),
    Vector3::new(-0.693785463118375, 0.624687236866834, 0.3583679495453),
    Vector3::new(-0.624687236866834, 0.693785463118374, 0.3583679495453),
    Vector3::new(-0.548744806523973, 0.755282430652048, 0.3583679495453),
    Vector3::new(-0.466790213248601, 0.808504365822487, 0.3583679495453),
    Vector3::new(-0.379721368714746, 0.852868157970561, 0.3583679495453),
    Vector3::new(-0.288492217403447, 0.887887748105772, 0.3583679495453),
    Vector3::new(-0.194102284987399, 0.913179454270281, 0.3583679495453),
    Vector3::new(-0.097585727318513, 0.928466175238718, 0.3583679495453),
    Vector3::new(0.0, 0.891006524188368, 0.453990499739547),
    Vector3::new(0.116299688845531, 0.883383839857097, 0.453990499739547),
    Vector3::new(0.230609457770549, 0.8606462131056, 0.453990499739547),
    Vector3::new(0.340973434936093, 0.823182691031656, 0.453990499739547),
    Vector3::new(0.445503262094184, 0.771634284884801, 0.453990499739547),
    Vector3::new(0.542410404921004, 0.706883002186125, 0.453990499739547),
    Vector3::new(0.63003675533505, 0.630036755335051, 0.453990499739547),
    Vector3::new(0.706883002186125, 0.542410404921004, 0.453990499739547),
    Vector3::new(0.7716342848848, 0.445503262094184, 0.453990499739547),
    Vector3::new(0.823182691031656, 0.340973434936093, 0.453990499739547),
    Vector3::new(0.8606462131056, 0.230609457770549, 0.453990499739547),
    Vector3::new(0.883383839857097, 0.116299688845531, 0.453990499739547),
    Vector3::new(0.891006524188368, 0.0, 0.453990499739547),
    Vector3::new(0.883383839857097, -0.116299688845531, 0.453990499739547),
    Vector3::new(0.8606462131056, -0.23060945777055, 0.453990499739547),
    Vector3::new(0.823182691031656, -0.340973434936093, 0.453990499739547),
    Vector3::new(0.771634284884801, -0.445503262094184, 0.453990499739547),
    Vector3::new(0.706883002186125, -0.542410404921004, 0.453990499739547),
    Vector3::new(0.630036755335051, -0.63003675533505, 0.453990499739547),
    Vector3::new(0.542410404921004, -0.706883002186125, 0.453990499739547),
    Vector3::new(0.445503262094184, -0.771634284884801, 0.453990499739547),
    Vector3::new(0.340973434936093, -0.823182691031656, 0.453990499739547),
    Vector3::new(0.23060945777055, -0.8606462131056, 0.453990499739547),
    Vector3::new(0.116299688845531, -0.883383839857097, 0.453990499739547),
    Vector3::new(0.0, -0.891006524188368, 0.453990499739547),
    Vector3::new(-0.116299688845531, -0.883383839857097, 0.453990499739547),
    Vector3::new(-0.230609457770549, -0.8606462131056, 0.453990499739547),
    Vector3::new(-0.340973434936093, -0.823182691031656, 0.453990499739547),
    Vector3::new(-0.445503262094184, -0.7716342848848, 0.453990499739547),
    Vector3::new(-0.542410404921004, -0.706883002186125, 0.453990499739547),
    Vector3::new(-0.63003675533505, -0.630036755335051, 0.453990499739547),
    Vector3::new(-0.706883002186125, -0.542410404921004, 0.453990499739547),
    Vector3::new(-0.7716342848848, -0.445503262094184, 0.453990499739547),
    Vector3::new(-0.823182691031656, -0.340973434936093, 0.453990499739547),
    Vector3::new(-0.8606462131056, -0.230609457770549, 0.453990499739547),
    Vector3::new(-0.883383839857097, -0.116299688845531, 0.453990499739547),
    Vector3::new(-0.891006524188368, 0.0, 0.453990499739547),
    Vector3::new(-0.883383839857097, 0.116299688845531, 0.453990499739547),
    Vector3::new(-0.8606462131056, 0.230609457770549, 0.453990499739547),
    Vector3::new(-0.823182691031656, 0.340973434936093, 0.453990499739547),
    Vector3::new(-0.7716342848848, 0.445503262094184, 0.453990499739547),
    Vector3::new(-0.706883002186125, 0.542410404921004, 0.453990499739547),
    Vector3::new(-0.630036755335051, 0.63003675533505, 0.453990499739547),
    Vector3::new(-0.542410404921004, 0.706883002186125, 0.453990499739547),
    Vector3::new(-0.445503262094184, 0.7716342848848, 0.453990499739547),
    Vector3::new(-0.340973434936093, 0.823182691031656, 0.453990499739547),
    Vector3::new(-0.230609457770549, 0.8606462131056, 0.453990499739547),
    Vector3::new(-0.116299688845531, 0.883383839857097, 0.453990499739547),
    Vector3::new(0.0, 0.838670567945424, 0.544639035015027),
    Vector3::new(0.109468475760944, 0.831495624974946, 0.544639035015027),
    Vector3::new(0.217063915551223, 0.810093561327006, 0.544639035015027),
    Vector3::new(0.320945331564934, 0.774830572244394, 0.544639035015027),
    Vector3::new(0.419335283972712, 0.72631001724706, 0.544639035015027),
    Vector3::new(0.510550293410012, 0.665362096483449, 0.544639035015027),
    Vector3::new(0.593029645775782, 0.593029645775783, 0.544639035015027),
    Vector3::new(0.665362096483449, 0.510550293410012, 0.544639035015027),
    Vector3::new(0.72631001724706, 0.419335283972712, 0.544639035015027),
    Vector3::new(0.774830572244394, 0.320945331564934, 0.544639035015027),
    Vector3::new(0.810093561327006, 0.217063915551223, 0.544639035015027),
    Vector3::new(0.831495624974946, 0.109468475760944, 0.544639035015027),
    Vector3::new(0.838670567945424, 0.0, 0.544639035015027),
    Vector3::new(0.831495624974946, -0.109468475760944, 0.544639035015027),
    Vector3::new(0.810093561327006, -0.217063915551223, 0.544639035015027),
    Vector3::new(0.774830572244394, -0.320945331564934, 0.544639035015027),
    Vector3::new(0.72631001724706, -0.419335283972712, 0.544639035015027),
    Vector3::new(0.665362096483449, -0.510550293410012, 0.544639035015027),
    Vector3::new(0.593029645775783, -0.593029645775782, 0.544639035015027),
    Vector3::new(0.510550293410012, -0.665362096483449, 0.544639035015027),
    Vector3::new(0.419335283972712, -0.72631001724706, 0.544639035015027),
    Vector3::new(0.320945331564934, -0.774830572244394, 0.544639035015027),
    Vector3::new(0.217063915551224, -0.810093561327006, 0.544639035015027),
    Vector3::new(0.109468475760944, -0.831495624974946, 0.544639035015027),
    Vector3::new(0.0, -0.838670567945424, 0.544639035015027),
    Vector3::new(-0.109468475760944, -0.831495624974946, 0.544639035015027),
    Vector3::new(-0.217063915551223, -0.810093561327006, 0.544639035015027),
    Vector3::new(-0.320945331564934, -0.774830572244394, 0.544639035015027),
    Vector3::new(-0.419335283972712, -0.72631001724706, 0.544639035015027),
    Vector3::new(-0.510550293410012, -0.665362096483449, 0.544639035015027),
    Vector3::new(-0.593029645775782, -0.593029645775783, 0.544639035015027),
    Vector3::new(-0.665362096483449, -0.510550293410012, 0.544639035015027),
    Vector3::new(-0.72631001724706, -0.419335283972712, 0.544639035015027),
    Vector3::new(-0.774830572244394, -0.320945331564934, 0.544639035015027),
    Vector3::new(-0.810093561327006, -0.217063915551223, 0.544639035015027),
    Vector3::new(-0.831495624974946, -0.109468475760944, 0.544639035015027),
    Vector3::new(-0.838670567945424, 0.0, 0.544639035015027),
    Vector3::new(-0.831495624974946, 0.109468475760944, 0.544639035015027),
    Vector3::new(-0.810093561327006, 0.217063915551223, 0.544639035015027),
    Vector3::new(-0.774830572244394, 0.320945331564934, 0.544639035015027),
    Vector3::new(-0.72631001724706, 0.419335283972712, 0.544639035015027),
    Vector3::new(-0.665362096483449, 0.510550293410012, 0.544639035015027),
    Vector3::new(-0.593029645775783, 0.593029645775782, 0.544639035015027),
    Vector3::new(-0.510550293410012, 0.665362096483449, 0.544639035015027),
    Vector3::new(-0.419335283972712, 0.72631001724706, 0.544639035015027),
    Vector3::new(-0.320945331564934, 0.774830572244394, 0.544639035015027),
    Vector3::new(-0.217063915551223, 0.810093561327006, 0.544639035015027),
    Vector3::new(-0.109468475760944, 0.831495624974946, 0.544639035015027),
    Vector3::new(0.0, 0.777145961456971, 0.629320391049837),
    Vector3::new(0.101437903148169, 0.770497370023923, 0.629320391049837),
    Vector3::new(0.201140175649574, 0.750665354967537, 0.629320391049837),
    Vector3::new(0.297400883979021, 0.717989247563901, 0.629320391049837),
    Vector3::new(0.388572980728485, 0.673028145070219, 0.629320391049837),
    Vector3::new(0.473096486044902, 0.616551344415731, 0.629320391049837),
    Vector3::new(0.549525179317963, 0.549525179317963, 0.629320391049837),
    Vector3::new(0.616551344415731, 0.473096486044902, 0.629320391049837),
    Vector3::new(0.673028145070219, 0.388572980728486, 0.629320391049837),
    Vector3::new(0.717989247563901, 0.297400883979021, 0.629320391049837),
    Vector3::new(0.750665354967537, 0.201140175649574, 0.629320391049837),
    Vector3::new(0.770497370023923, 0.101437903148169, 0.629320391049837),
    Vector3::new(0.777145961456971, 0.0, 0.629320391049837),
    Vector3::new(0.770497370023923, -0.101437903148169, 0.629320391049837),
    Vector3::new(0.750665354967537, -0.201140175649574, 0.629320391049837),
    Vector3::new(0.717989247563901, -0.297400883979021, 0.629320391049837),
    Vector3::new(0.673028145070219, -0.388572980728485, 0.629320391049837),
    Vector3::new(0.616551344415731, -0.473096486044902, 0.629320391049837),
    Vector3::new(0.549525179317963, -0.549525179317963, 0.629320391049837),
    Vector3::new(0.473096486044902, -0.616551344415731, 0.629320391049837),
    Vector3::new(0.388572980728485, -0.673028145070219, 0.629320391049837),
    Vector3::new(0.297400883979021, -0.717989247563901, 0.629320391049837),
    Vector3::new(0.201140175649574, -0.750665354967537, 0.629320391049837),
    Vector3::new(0.101437903148169, -0.770497370023923, 0.629320391049837),
    Vector3::new(0.0, -0.777145961456971, 0.629320391049837),
    Vector3::new(-0.101437903148169, -0.770497370023923, 0.629320391049837),
    Vector3::new(-0.201140175649574, -0.750665354967537, 0.629320391049837),
    Vector3::new(-0.297400883979021, -0.717989247563901, 0.629320391049837),
    Vector3::new(-0.388572980728486, -0.673028145070219, 0.629320391049837),
    Vector3::new(-0.473096486044902, -0.616551344415731, 0.629320391049837),
    Vector3::new(-0.549525179317963, -0.549525179317964, 0.629320391049837),
    Vector3::new(-0.616551344415731, -0.473096486044902, 0.629320391049837),
    Vector3::new(-0.673028145070219, -0.388572980728486, 0.629320391049837),
    Vector3::new(-0.717989247563901, -0.297400883979021, 0.629320391049837),
    Vector3::new(-0.750665354967537, -0.201140175649574, 0.629320391049837),
    Vector3::new(-0.770497370023923, -0.101437903148169, 0.629320391049837),
    Vector3::new(-0.777145961456971, 0.0, 0.629320391049837),
    Vector3::new(-0.770497370023923, 0.101437903148169, 0.629320391049837),
    Vector3::new(-0.750665354967537, 0.201140175649573, 0.629320391049837),
    Vector3::new(-0.717989247563901, 0.297400883979022, 0.629320391049837),
    Vector3::new(-0.673028145070219, 0.388572980728486, 0.629320391049837),
    Vector3::new(-0.616551344415731, 0.473096486044902, 0.629320391049837),
    Vector3::new(-0.549525179317964, 0.549525179317963, 0.629320391049837),
    Vector3::new(-0.473096486044902, 0.616551344415731, 0.629320391049837),
    Vector3::new(-0.388572980728486, 0.673028145070219, 0.629320391049837),
    Vector3::new(-0.297400883979021, 0.717989247563901, 0.629320391049837),
    Vector3::new(-0.201140175649574, 0.750665354967537, 0.629320391049837),
    Vector3::new(-0.101437903148169, 0.770497370023923, 0.629320391049837),
    Vector3::new(0.0, 0.707106781186548, 0.707106781186547),
    Vector3::new(0.092295955641257, 0.701057384649978, 0.707106781186547),
    Vector3::new(0.183012701892219, 0.683012701892219, 0.707106781186547),
    Vector3::new(0.270598050073099, 0.653281482438188, 0.707106781186547),
    Vector3::new(0.353553390593274, 0.612372435695795, 0.707106781186547),
    Vector3::new(0.430459334576879, 0.560985526796931, 0.707106781186547),
    Vector3::new(0.5, 0.5, 0.707106781186547),
    Vector3::new(0.560985526796931, 0.430459334576879, 0.707106781186547),
    Vector3::new(0.612372435695795, 0.353553390593274, 0.707106781186547),
    Vector3::new(0.653281482438188, 0.270598050073099, 0.707106781186547),
    Vector3::new(0.683012701892219, 0.183012701892219, 0.707106781186547),
    Vector3::new(0.701057384649978, 0.092295955641257, 0.707106781186547),
    Vector3::new(0.707106781186548, 0.0, 0.707106781186547),
    Vector3::new(0.701057384649978, -0.092295955641257, 0.707106781186547),
    Vector3::new(0.683012701892219, -0.183012701892219, 0.707106781186547),
    Vector3::new(0.653281482438188, -0.270598050073099, 0.707106781186547),
    Vector3::new(0.612372435695795, -0.353553390593274, 0.707106781186547),
    Vector3::new(0.560985526796931, -0.430459334576879, 0.707106781186547),
    Vector3::new(0.5, -0.5, 0.707106781186547),
    Vector3::new(0.43045933457688, -0.560985526796931, 0.707106781186547),
    Vector3::new(0.353553390593274, -0.612372435695795, 0.707106781186547),
    Vector3::new(0.270598050073099, -0.653281482438188, 0.707106781186547),
    Vector3::new(0.18301270189222, -0.683012701892219, 0.707106781186547),
    Vector3::new(0.092295955641257, -0.701057384649978, 0.707106781186547),
    Vector3::new(0.0, -0.707106781186548, 0.707106781186547),
    Vector3::new(-0.092295955641257, -0.701057384649978, 0.707106781186547),
    Vector3::new(-0.183012701892219, -0.683012701892219, 0.707106781186547),
    Vector3::new(-0.270598050073098, -0.653281482438188, 0.707106781186547),
    Vector3::new(-0.353553390593274, -0.612372435695795, 0.707106781186547),
    Vector3::new(-0.430459334576879, -0.560985526796931, 0.707106781186547),
    Vector3::new(-0.5, -0.5, 0.707106781186547),
    Vector3::new(-0.560985526796931, -0.43045933457688, 0.707106781186547),
    Vector3::new(-0.612372435695794, -0.353553390593274, 0.707106781186547),
    Vector3::new(-0.653281482438188, -0.270598050073098, 0.707106781186547),
    Vector3::new(-0.683012701892219, -0.183012701892219, 0.707106781186547),
    Vector3::new(-0.701057384649978, -0.092295955641257, 0.707106781186547),
    Vector3::new(-0.707106781186548, 0.0, 0.707106781186547),
    Vector3::new(-0.701057384649978, 0.092295955641257, 0.707106781186547),
    Vector3::new(-0.68301270189222, 0.183012701892219, 0.707106781186547),
    Vector3::new(-0.653281482438188, 0.270598050073099, 0.707106781186547),
    Vector3::new(-0.612372435695795, 0.353553390593274, 0.707106781186547),
    Vector3::new(-0.560985526796931, 0.430459334576879, 0.707106781186547),
    Vector3::new(-0.5, 0.5, 0.707106781186547),
    Vector3::new(-0.43045933457688, 0.560985526796931, 0.707106781186547),
    Vector3::new(-0.353553390593274, 0.612372435695794, 0.707106781186547),
    Vector3::new(-0.270598050073098, 0.653281482438188, 0.707106781186547),
    Vector3::new(-0.183012701892219, 0.683012701892219, 0.707106781186547),
    Vector3::new(-0.092295955641257, 0.701057384649978, 0.707106781186547),
    Vector3::new(0.0, 0.629320391049838, 0.777145961456971),
    Vector3::new(0.109280339074444, 0.619759600234555, 0.777145961456971),
    Vector3::new(0.215240250344631, 0.591367727579635, 0.777145961456971),
    Vector3::new(0.314660195524919, 0.545007445768716, 0.777145961456971),
    Vector3::new(0.404519349889923, 0.48208738850519, 0.777145961456971),
    Vector3::new(0.48208738850519, 0.404519349889923, 0.777145961456971),
    Vector3::new(0.545007445768716, 0.314660195524919, 0.777145961456971),
    Vector3::new(0.591367727579635, 0.215240250344631, 0.777145961456971),
    Vector3::new(0.619759600234555, 0.109280339074444, 0.777145961456971),
    Vector3::new(0.629320391049838, 0.0, 0.777145961456971),
    Vector3::new(0.619759600234555, -0.109280339074444, 0.777145961456971),
    Vector3::new(0.591367727579635, -0.215240250344631, 0.777145961456971),
    Vector3::new(0.545007445768716, -0.314660195524919, 0.777145961456971),
    Vector3::new(0.48208738850519, -0.404519349889923, 0.777145961456971),
    Vector3::new(0.404519349889923, -0.48208738850519, 0.777145961456971),
    Vector3::new(0.314660195524919, -0.545007445768716, 0.777145961456971),
    Vector3::new(0.215240250344631, -0.591367727579635, 0.777145961456971),
    Vector3::new(0.109280339074444, -0.619759600234555, 0.777145961456971),
    Vector3::new(0.0, -0.629320391049838, 0.777145961456971),
    Vector3::new(-0.109280339074444, -0.619759600234555, 0.777145961456971),
    Vector3::new(-0.215240250344631, -0.591367727579635, 0.777145961456971),
    Vector3::new(-0.314660195524919, -0.545007445768716, 0.777145961456971),
    Vector3::new(-0.404519349889923, -0.48208738850519, 0.777145961456971),
    Vector3::new(-0.48208738850519, -0.404519349889923, 0.777145961456971),
    Vector3::new(-0.545007445768716, -0.314660195524919, 0.777145961456971),
    Vector3::new(-0.591367727579635, -0.215240250344631, 0.777145961456971),
    Vector3::new(-0.619759600234555, -0.109280339074444, 0.777145961456971),
    Vector3::new(-0.629320391049838, 0.0, 0.777145961456971),
    Vector3::new(-0.619759600234555, 0.109280339074444, 0.777145961456971),
    Vector3::new(-0.591367727579635, 0.215240250344631, 0.777145961456971),
    Vector3::new(-0.545007445768716, 0.314660195524919, 0.777145961456971),
    Vector3::new(-0.48208738850519, 0.404519349889923, 0.777145961456971),
    Vector3::new(-0.404519349889923, 0.48208738850519, 0.777145961456971),
    Vector3::new(-0.314660195524919, 0.545007445768716, 0.777145961456971),
    Vector3::new(-0.215240250344631, 0.591367727579635, 0.777145961456971),
    Vector3::new(-0.109280339074444, 0.619759600234555, 0.777145961456971),
    Vector3::new(0.0, 0.544639035015027, 0.838670567945424),
    Vector3::new(0.094575575916635, 0.536364744275886, 0.838670567945424),
    Vector3::new(0.186277520816593, 0.511793282195579, 0.838670567945424),
    Vector3::new(0.272319517507513, 0.471671240215656, 0.838670567945424),
    Vector3::new(0.350087223459293, 0.417217706278944, 0.838670567945424),
    Vector3::new(0.417217706278944, 0.350087223459293, 0.838670567945424),
    Vector3::new(0.471671240215656, 0.272319517507514, 0.838670567945424),
    Vector3::new(0.511793282195579, 0.186277520816594, 0.838670567945424),
    Vector3::new(0.536364744275886, 0.094575575916635, 0.838670567945424),
    Vector3::new(0.544639035015027, 0.0, 0.838670567945424),
    Vector3::new(0.536364744275886, -0.094575575916635, 0.838670567945424),
    Vector3::new(0.511793282195579, -0.186277520816593, 0.838670567945424),
    Vector3::new(0.471671240215656, -0.272319517507513, 0.838670567945424),
    Vector3::new(0.417217706278944, -0.350087223459293, 0.838670567945424),
    Vector3::new(0.350087223459293, -0.417217706278944, 0.838670567945424),
    Vector3::new(0.272319517507513, -0.471671240215656, 0.838670567945424),
    Vector3::new(0.186277520816594, -0.511793282195579, 0.838670567945424),
    Vector3::new(0.094575575916635, -0.536364744275886, 0.838670567945424),
    Vector3::new(0.0, -0.544639035015027, 0.838670567945424),
    Vector3::new(-0.094575575916635, -0.536364744275886, 0.838670567945424),
    Vector3::new(-0.186277520816593, -0.511793282195579, 0.838670567945424),
    Vector3::new(-0.272319517507514, -0.471671240215656, 0.838670567945424),
    Vector3::new(-0.350087223459293, -0.417217706278944, 0.838670567945424),
    Vector3::new(-0.417217706278944, -0.350087223459293, 0.838670567945424),
    Vector3::new(-0.471671240215656, -0.272319517507514, 0.838670567945424),
    Vector3::new(-0.511793282195579, -0.186277520816593, 0.838670567945424),
    Vector3::new(-0.536364744275886, -0.094575575916635, 0.838670567945424),
    Vector3::new(-0.544639035015027, 0.0, 0.838670567945424),
    Vector3::new(-0.536364744275886, 0.094575575916635, 0.838670567945424),
    Vector3::new(-0.511793282195579, 0.186277520816594, 0.838670567945424),
    Vector3::new(-0.471671240215656, 0.272319517507514, 0.838670567945424),
    Vector3::new(-0.417217706278944, 0.350087223459293, 0.838670567945424),
    Vector3::new(-0.350087223459293, 0.417217706278944, 0.838670567945424),
    Vector3::new(-0.272319517507514, 0.471671240215656, 0.838670567945424),
    Vector3::new(-0.186277520816593, 0.511793282195579, 0.838670567945424),
    Vector3::new(-0.094575575916635, 0.536364744275886, 0.838670567945424),
    Vector3::new(0.0, 0.453990499739547, 0.891006524188368),
    Vector3::new(0.117501387628206, 0.438521148588309, 0.891006524188368),
    Vector3::new(0.226995249869773, 0.39316730585124, 0.891006524188368),
    Vector3::new(0.321019760960103, 0.321019760960103, 0.891006524188368),
    Vector3::new(0.39316730585124, 0.226995249869773, 0.891006524188368),
    Vector3::new(0.438521148588309, 0.117501387628206, 0.891006524188368),
    Vector3::new(0.453990499739547, 0.0, 0.891006524188368),
    Vector3::new(0.438521148588309, -0.117501387628206, 0.891006524188368),
    Vector3::new(0.39316730585124, -0.226995249869773, 0.891006524188368),
    Vector3::new(0.321019760960103, -0.321019760960103, 0.891006524188368),
    Vector3::new(0.226995249869773, -0.39316730585124, 0.891006524188368),
    Vector3::new(0.117501387628206, -0.438521148588309, 0.891006524188368),
    Vector3::new(0.0, -0.453990499739547, 0.891006524188368),
    Vector3::new(-0.117501387628206, -0.438521148588309, 0.891006524188368),
    Vector3::new(-0.226995249869773, -0.39316730585124, 0.891006524188368),
    Vector3::new(-0.321019760960103, -0.321019760960103, 0.891006524188368),
    Vector3::new(-0.39316730585124, -0.226995249869774, 0.891006524188368),
    Vector3::new(-0.438521148588309, -0.117501387628206, 0.891006524188368),
    Vector3::new(-0.453990499739547, 0.0, 0.891006524188368),
    Vector3::new(-0.438521148588309, 0.117501387628205, 0.891006524188368),
    Vector3::new(-0.39316730585124, 0.226995249869773, 0.891006524188368),
    Vector3::new(-0.321019760960103, 0.321019760960103, 0.891006524188368),
    Vector3::new(-0.226995249869774, 0.39316730585124, 0.891006524188368),
    Vector3::new(-0.117501387628206, 0.438521148588309, 0.891006524188368),
    Vector3::new(0.0, 0.3583679495453, 0.933580426497202),
    Vector3::new(0.092752450496663, 0.346156857780063, 0.933580426497202),
    Vector3::new(0.17918397477265, 0.31035574820837, 0.933580426497202),
    Vector3::new(0.2534044072834, 0.2534044072834, 0.933580426497202),
    Vector3::new(0.31035574820837, 0.17918397477265, 0.933580426497202),
    Vector3::new(0.346156857780063, 0.092752450496663, 0.933580426497202),
    Vector3::new(0.3583679495453, 0.0, 0.933580426497202),
    Vector3::new(0.346156857780063, -0.092752450496663, 0.933580426497202),
    Vector3::new(0.31035574820837, -0.17918397477265, 0.933580426497202),
    Vector3::new(0.2534044072834, -0.2534044072834, 0.933580426497202),
    Vector3::new(0.17918397477265, -0.31035574820837, 0.933580426497202),
    Vector3::new(0.092752450496663, -0.346156857780063, 0.933580426497202),
    Vector3::new(0.0, -0.3583679495453, 0.933580426497202),
    Vector3::new(-0.092752450496663, -0.346156857780063, 0.933580426497202),
    Vector3::new(-0.17918397477265, -0.31035574820837, 0.933580426497202),
    Vector3::new(-0.2534044072834, -0.2534044072834, 0.933580426497202),
    Vector3::new(-0.31035574820837, -0.17918397477265, 0.933580426497202),
    Vector3::new(-0.346156857780063, -0.092752450496663, 0.933580426497202),
    Vector3::new(-0.3583679495453, 0.0, 0.933580426497202),
    Vector3::new(-0.346156857780063, 0.092752450496663, 0.933580426497202),
    Vector3::new(-0.31035574820837, 0.17918397477265, 0.933580426497202),
    Vector3::new(-0.2534044072834, 0.2534044072834, 0.933580426497202),
    Vector3::new(-0.17918397477265, 0.31035574820837, 0.933580426497202),
    Vector3::new(-0.092752450496663, 0.346156857780063, 0.933580426497202),
    Vector3::new(0.0, 0.258819045102521, 0.965925826289068),
    Vector3::new(0.12940952255126, 0.224143868042013, 0.965925826289068),
    Vector3::new(0.224143868042013, 0.12940952255126, 0.965925826289068),
    Vector3::new(0.258819045102521, 0.0, 0.965925826289068),
    Vector3::new(0.224143868042013, -0.12940952255126, 0.965925826289068),
    Vector3::new(0.12940952255126, -0.224143868042013, 0.965925826289068),
    Vector3::new(0.0, -0.258819045102521, 0.965925826289068),
    Vector3::new(-0.12940952255126, -0.224143868042013, 0.965925826289068),
    Vector3::new(-0.224143868042013, -0.12940952255126, 0.965925826289068),
    Vector3::new(-0.258819045102521, 0.0, 0.965925826289068),
    Vector3::new(-0.224143868042013, 0.12940952255126, 0.965925826289068),
    Vector3::new(-0.12940952255126, 0.224143868042013, 0.965925826289068),
    Vector3::new(0.0, 0.156434465040231, 0.987688340595138),
    Vector3::new(0.078217232520115, 0.135476220752269, 0.987688340595138),
    Vector3::new(0.135476220752269, 0.078217232520115, 0.987688340595138),
    Vector3::new(0.156434465040231, 0.0, 0.987688340595138),
    Vector3::new(0.135476220752269, -0.078217232520115, 0.987688340595138),
    Vector3::new(0.078217232520115, -0.135476220752269, 0.987688340595138),
    Vector3::new(0.0, -0.156434465040231, 0.987688340595138),
    Vector3::new(-0.078217232520115, -0.135476220752269, 0.987688340595138),
    Vector3::new(-0.135476220752269, -0.078217232520116, 0.987688340595138),
    Vector3::new(-0.156434465040231, 0.0, 0.987688340595138),
    Vector3::new(-0.135476220752269, 0.078217232520115, 0.987688340595138),
    Vector3::new(-0.078217232520116, 0.135476220752269, 0.987688340595138),
    Vector3::new(0.0, 0.0, 1.0),
]
